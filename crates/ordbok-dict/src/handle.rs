// SpellChecker: top-level integration point.
//
// Owns the dictionary and the suggestion engine and exposes spell checking,
// suggestion lookup and dictionary maintenance through one type.
//
// Design notes:
// - The engine's alphabet starts out as the dictionary config's alphabet and
//   can be swapped without touching the dictionary.
// - `suggest` de-duplicates and caps; `check` returns the raw report with
//   every valid candidate in generation order.

use hashbrown::HashSet;
use ordbok_core::Alphabet;
use tracing::debug;

use crate::config::DictionaryConfig;
use crate::dictionary::{Dictionary, DictionaryStats};
use crate::suggestion::{SpellReport, SuggestionEngine};
use crate::Result;

/// Default cap on the number of suggestions returned by [`SpellChecker::suggest`].
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Dictionary plus suggestion engine behind one interface.
pub struct SpellChecker {
    dictionary: Dictionary,
    engine: SuggestionEngine,
    max_suggestions: usize,
}

impl SpellChecker {
    /// Create a checker with an empty dictionary.
    pub fn new(config: DictionaryConfig) -> Result<Self> {
        let engine = SuggestionEngine::new(config.alphabet.clone());
        Ok(Self {
            dictionary: Dictionary::new(config)?,
            engine,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        })
    }

    /// Create a checker and bulk-load `words`.
    pub fn from_words<I, S>(words: I, config: DictionaryConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checker = Self::new(config)?;
        checker.dictionary.bulk_load(words);
        Ok(checker)
    }

    /// Check a single word.
    ///
    /// Returns `true` if the filter allows the word and the tree confirms it.
    pub fn spell(&self, word: &str) -> bool {
        self.dictionary.may_contain(word) && self.dictionary.contains(word)
    }

    /// Full report for one word: verdict, suggestions and classification
    /// counts.
    pub fn check(&self, word: &str) -> Result<SpellReport> {
        self.engine.spell_check(word, &self.dictionary)
    }

    /// Distinct suggestions for a word, in first-seen order, capped at the
    /// configured maximum. A correct word yields none.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>> {
        let report = self.check(word)?;
        let mut seen = HashSet::with_capacity(report.suggestions.len());
        let suggestions: Vec<String> = report
            .suggestions
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .take(self.max_suggestions)
            .collect();
        debug!(word, count = suggestions.len(), "suggest");
        Ok(suggestions)
    }

    pub fn add(&mut self, word: &str) {
        self.dictionary.add(word);
    }

    /// Remove one occurrence of `word`. Returns `false` if it was absent.
    pub fn remove(&mut self, word: &str) -> bool {
        self.dictionary.remove(word)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.engine.alphabet()
    }

    /// Replace the alphabet used for substitution and insertion candidates.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        self.engine = SuggestionEngine::new(alphabet);
    }

    /// Set the maximum number of suggestions to return.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }

    pub fn stats(&self, fill_rate_interval: usize) -> Result<DictionaryStats> {
        self.dictionary.stats(fill_rate_interval)
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self {
            dictionary: Dictionary::default(),
            engine: SuggestionEngine::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}
