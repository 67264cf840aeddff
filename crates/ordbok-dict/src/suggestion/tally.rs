// Classification counters for candidate batches

use std::ops::AddAssign;

use ordbok_core::CandidateClass;
use serde::Serialize;

/// How many candidates fell into each class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    /// Confirmed by the tree.
    pub valid: usize,
    /// Filter said maybe, tree said no.
    pub false_positive: usize,
    /// Rejected by the filter without a tree lookup.
    pub hash_miss: usize,
}

impl ClassCounts {
    pub fn record(&mut self, class: CandidateClass) {
        match class {
            CandidateClass::Valid => self.valid += 1,
            CandidateClass::FalsePositive => self.false_positive += 1,
            CandidateClass::HashMiss => self.hash_miss += 1,
        }
    }

    /// Total candidates seen; equals the batch length.
    pub fn total(&self) -> usize {
        self.valid + self.false_positive + self.hash_miss
    }

    /// Candidates that needed a tree lookup.
    pub fn tree_lookups(&self) -> usize {
        self.valid + self.false_positive
    }
}

impl AddAssign for ClassCounts {
    fn add_assign(&mut self, other: ClassCounts) {
        self.valid += other.valid;
        self.false_positive += other.false_positive;
        self.hash_miss += other.hash_miss;
    }
}

/// Result of classifying one batch: the counts plus the valid candidates in
/// the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub counts: ClassCounts,
    pub suggestions: Vec<String>,
}

impl Classification {
    pub fn record(&mut self, candidate: &str, class: CandidateClass) {
        self.counts.record(class);
        if class == CandidateClass::Valid {
            self.suggestions.push(candidate.to_owned());
        }
    }
}

impl AddAssign for Classification {
    fn add_assign(&mut self, other: Classification) {
        self.counts += other.counts;
        self.suggestions.extend(other.suggestions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_counts_are_zero() {
        let counts = ClassCounts::default();
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.tree_lookups(), 0);
    }

    #[test]
    fn record_increments_matching_counter() {
        let mut counts = ClassCounts::default();
        counts.record(CandidateClass::Valid);
        counts.record(CandidateClass::HashMiss);
        counts.record(CandidateClass::HashMiss);
        counts.record(CandidateClass::FalsePositive);
        assert_eq!(counts.valid, 1);
        assert_eq!(counts.false_positive, 1);
        assert_eq!(counts.hash_miss, 2);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.tree_lookups(), 2);
    }

    #[test]
    fn only_valid_candidates_become_suggestions() {
        let mut c = Classification::default();
        c.record("hus", CandidateClass::Valid);
        c.record("hux", CandidateClass::FalsePositive);
        c.record("hyx", CandidateClass::HashMiss);
        assert_eq!(c.suggestions, vec!["hus"]);
        assert_eq!(c.counts.total(), 3);
    }

    #[test]
    fn add_assign_merges_batches() {
        let mut a = Classification::default();
        a.record("bil", CandidateClass::Valid);
        let mut b = Classification::default();
        b.record("bok", CandidateClass::Valid);
        b.record("bxk", CandidateClass::HashMiss);
        a += b;
        assert_eq!(a.suggestions, vec!["bil", "bok"]);
        assert_eq!(a.counts.valid, 2);
        assert_eq!(a.counts.hash_miss, 1);
    }
}
