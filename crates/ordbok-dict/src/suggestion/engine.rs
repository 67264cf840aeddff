// Suggestion engine: filter-then-verify classification of edit candidates
//
// A candidate is first probed against the membership filter. Only candidates
// the filter cannot rule out reach the tree. The three outcomes are counted
// separately so callers can see how much work the filter saved.

use std::time::{Duration, Instant};

use ordbok_core::{Alphabet, CandidateClass, EditKind, FilterProbe, Verdict};
use serde::Serialize;
use tracing::{debug, trace};

use super::generators::{CandidateGenerator, generator_for};
use super::tally::{ClassCounts, Classification};
use crate::dictionary::Dictionary;
use crate::{DictError, Result};

/// Outcome of checking one query word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellReport {
    pub word: String,
    pub verdict: Verdict,
    /// Valid candidates in generation order. May repeat a word when two
    /// edits produce it.
    pub suggestions: Vec<String>,
    /// Counts summed over every family.
    pub counts: ClassCounts,
    /// Counts per family, in the order the families ran.
    pub per_family: Vec<(EditKind, ClassCounts)>,
    /// Time spent generating and checking candidates.
    pub elapsed: Duration,
}

impl SpellReport {
    fn correct(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            verdict: Verdict::Correct,
            suggestions: Vec::new(),
            counts: ClassCounts::default(),
            per_family: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.verdict.is_correct()
    }
}

/// Runs candidate generators for a word and classifies the output against a
/// dictionary.
pub struct SuggestionEngine {
    alphabet: Alphabet,
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl SuggestionEngine {
    /// Engine running all four families (transposition, substitution,
    /// deletion, insertion) over `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_generators(alphabet, EditKind::ALL.into_iter().map(generator_for).collect())
    }

    /// Engine running the given generators in order.
    pub fn with_generators(alphabet: Alphabet, generators: Vec<Box<dyn CandidateGenerator>>) -> Self {
        Self {
            alphabet,
            generators,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Edit kinds this engine runs, in order.
    pub fn kinds(&self) -> Vec<EditKind> {
        self.generators.iter().map(|g| g.kind()).collect()
    }

    /// Classify one candidate: filter first, tree only if the filter
    /// cannot rule it out.
    pub fn classify_candidate(candidate: &str, dictionary: &Dictionary) -> CandidateClass {
        match dictionary.filter().probe(candidate) {
            FilterProbe::Absent => CandidateClass::HashMiss,
            FilterProbe::MaybePresent if dictionary.contains(candidate) => CandidateClass::Valid,
            FilterProbe::MaybePresent => CandidateClass::FalsePositive,
        }
    }

    /// Classify a batch of candidates.
    ///
    /// `counts.total()` of the result always equals the batch length.
    pub fn classify<I, S>(candidates: I, dictionary: &Dictionary) -> Classification
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classification = Classification::default();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let class = Self::classify_candidate(candidate, dictionary);
            trace!(candidate, ?class, "classified");
            classification.record(candidate, class);
        }
        classification
    }

    /// Every candidate family for `word`, in run order.
    pub fn candidates(&self, word: &str) -> Result<Vec<(EditKind, Vec<String>)>> {
        let chars: Vec<char> = word.chars().collect();
        self.generators
            .iter()
            .map(|g| Ok((g.kind(), g.generate(&chars, &self.alphabet)?)))
            .collect()
    }

    /// Check `word` and, if it is not in the dictionary, collect
    /// suggestions from every candidate family.
    ///
    /// The filter is probed first; a word is `Correct` only when the filter
    /// allows it and the tree confirms it. An empty word is rejected.
    pub fn spell_check(&self, word: &str, dictionary: &Dictionary) -> Result<SpellReport> {
        if word.is_empty() {
            return Err(DictError::InvalidInput(
                "cannot spell-check an empty word".to_string(),
            ));
        }
        if Self::classify_candidate(word, dictionary) == CandidateClass::Valid {
            return Ok(SpellReport::correct(word));
        }

        let start = Instant::now();
        let mut total = Classification::default();
        let mut per_family = Vec::with_capacity(self.generators.len());
        for (kind, batch) in self.candidates(word)? {
            let classification = Self::classify(&batch, dictionary);
            per_family.push((kind, classification.counts));
            total += classification;
        }
        let elapsed = start.elapsed();

        debug!(
            word,
            valid = total.counts.valid,
            false_positive = total.counts.false_positive,
            hash_miss = total.counts.hash_miss,
            ?elapsed,
            "generated suggestions"
        );

        Ok(SpellReport {
            word: word.to_owned(),
            verdict: Verdict::Misspelled,
            suggestions: total.suggestions,
            counts: total.counts,
            per_family,
            elapsed,
        })
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}
