// Shared enums: spell verdicts, filter probes, candidate classes, strategies

use serde::{Deserialize, Serialize};

/// Final verdict for a queried word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The word is present in the dictionary.
    Correct,
    /// The word is not in the dictionary; suggestions were generated.
    Misspelled,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// Answer of the membership filter for a single word.
///
/// `Absent` is definitive. `MaybePresent` must be confirmed against the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterProbe {
    Absent,
    MaybePresent,
}

impl From<bool> for FilterProbe {
    fn from(bit: bool) -> Self {
        if bit {
            FilterProbe::MaybePresent
        } else {
            FilterProbe::Absent
        }
    }
}

/// Outcome of checking one generated candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateClass {
    /// Filter said maybe, tree confirmed: a real suggestion.
    Valid,
    /// Filter said maybe, tree said no: a hash collision.
    FalsePositive,
    /// Filter said absent; the tree was never consulted.
    HashMiss,
}

/// How the membership filter is kept sound when words are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStrategy {
    /// Clear the removed word's bit, then recompute every bit from a full
    /// traversal of the tree. O(size) per removal, no extra memory.
    #[default]
    Reassert,
    /// Keep a reference count per bucket and clear a bit only when its count
    /// reaches zero. O(depth) per removal, one counter per bucket.
    BucketCounts,
}

/// The four edit-distance-1 candidate families, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// Swap two adjacent characters.
    Transposition,
    /// Replace one character with another letter of the alphabet.
    Substitution,
    /// Drop one character.
    Deletion,
    /// Insert one letter of the alphabet before a position.
    Insertion,
}

impl EditKind {
    /// All families in the order the suggestion engine runs them.
    pub const ALL: [EditKind; 4] = [
        EditKind::Transposition,
        EditKind::Substitution,
        EditKind::Deletion,
        EditKind::Insertion,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_probe_from_bit() {
        assert_eq!(FilterProbe::from(true), FilterProbe::MaybePresent);
        assert_eq!(FilterProbe::from(false), FilterProbe::Absent);
    }

    #[test]
    fn removal_strategy_defaults_to_reassert() {
        assert_eq!(RemovalStrategy::default(), RemovalStrategy::Reassert);
    }

    #[test]
    fn removal_strategy_serializes_snake_case() {
        let json = serde_json::to_string(&RemovalStrategy::BucketCounts).unwrap();
        assert_eq!(json, "\"bucket_counts\"");
        let back: RemovalStrategy = serde_json::from_str("\"reassert\"").unwrap();
        assert_eq!(back, RemovalStrategy::Reassert);
    }

    #[test]
    fn edit_kinds_run_in_fixed_order() {
        assert_eq!(EditKind::ALL[0], EditKind::Transposition);
        assert_eq!(EditKind::ALL[3], EditKind::Insertion);
    }

    #[test]
    fn verdict_is_correct() {
        assert!(Verdict::Correct.is_correct());
        assert!(!Verdict::Misspelled.is_correct());
    }
}
