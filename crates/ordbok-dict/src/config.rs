// Dictionary configuration

use ordbok_core::{Alphabet, RemovalStrategy};
use serde::{Deserialize, Serialize};

use crate::filter::DEFAULT_CAPACITY;
use crate::{DictError, Result};

/// Settings fixed at dictionary construction.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs to name what it changes:
///
/// ```json
/// { "filter_capacity": 1024, "removal_strategy": "bucket_counts" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Number of slots in the membership filter.
    pub filter_capacity: usize,
    /// Letters used for substitution and insertion candidates.
    pub alphabet: Alphabet,
    /// How the filter is repaired after a removal.
    pub removal_strategy: RemovalStrategy,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            filter_capacity: DEFAULT_CAPACITY,
            alphabet: Alphabet::default(),
            removal_strategy: RemovalStrategy::default(),
        }
    }
}

impl DictionaryConfig {
    pub fn with_filter_capacity(mut self, capacity: usize) -> Self {
        self.filter_capacity = capacity;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_removal_strategy(mut self, strategy: RemovalStrategy) -> Self {
        self.removal_strategy = strategy;
        self
    }

    /// Check that every value is in its supported range.
    pub fn validate(&self) -> Result<()> {
        if self.filter_capacity == 0 || self.filter_capacity > i32::MAX as usize {
            return Err(DictError::InvalidConfig(format!(
                "filter_capacity must be in 1..={}, got {}",
                i32::MAX,
                self.filter_capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DictionaryConfig::default();
        assert_eq!(config.filter_capacity, 150_000);
        assert_eq!(config.alphabet.len(), 29);
        assert_eq!(config.removal_strategy, RemovalStrategy::Reassert);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = DictionaryConfig::default()
            .with_filter_capacity(64)
            .with_alphabet(Alphabet::latin())
            .with_removal_strategy(RemovalStrategy::BucketCounts);
        assert_eq!(config.filter_capacity, 64);
        assert_eq!(config.alphabet, Alphabet::latin());
        assert_eq!(config.removal_strategy, RemovalStrategy::BucketCounts);
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let config = DictionaryConfig::default().with_filter_capacity(0);
        assert!(matches!(config.validate(), Err(DictError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: DictionaryConfig =
            serde_json::from_str(r#"{ "filter_capacity": 1024, "removal_strategy": "bucket_counts" }"#)
                .unwrap();
        assert_eq!(config.filter_capacity, 1024);
        assert_eq!(config.removal_strategy, RemovalStrategy::BucketCounts);
        assert_eq!(config.alphabet, Alphabet::default());
    }

    #[test]
    fn alphabet_in_json_is_a_string() {
        let config: DictionaryConfig = serde_json::from_str(r#"{ "alphabet": "abc" }"#).unwrap();
        assert_eq!(config.alphabet.letters(), &['a', 'b', 'c']);
        assert!(serde_json::from_str::<DictionaryConfig>(r#"{ "alphabet": "" }"#).is_err());
    }
}
