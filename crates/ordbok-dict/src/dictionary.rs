// Dictionary: ordered word tree + membership filter, kept consistent
//
// The tree is authoritative. The filter only ever gains bits on insert,
// which keeps it sound for additions; every removal repairs it according to
// the configured RemovalStrategy before returning.

use ordbok_core::RemovalStrategy;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DictionaryConfig;
use crate::filter::HashFilter;
use crate::tree::OrderedWordTree;
use crate::Result;

/// Known-word set: an [`OrderedWordTree`] plus a [`HashFilter`].
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tree: OrderedWordTree,
    filter: HashFilter,
    config: DictionaryConfig,
}

/// Shape and filter diagnostics, as reported by the statistics tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryStats {
    pub size: usize,
    pub depth: usize,
    /// Index `i` counts nodes at depth `i + 1`.
    pub depth_histogram: Vec<usize>,
    pub average_depth: Option<f64>,
    pub min: Option<String>,
    pub max: Option<String>,
    /// Number of set filter slots.
    pub set_bits: usize,
    pub filter_capacity: usize,
    pub fill_rate_interval: usize,
    /// Entry `k`: number of windows with exactly `k` set bits.
    pub fill_rate: Vec<usize>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new(config: DictionaryConfig) -> Result<Self> {
        config.validate()?;
        let filter = HashFilter::new(config.filter_capacity, config.removal_strategy)?;
        Ok(Self {
            tree: OrderedWordTree::new(),
            filter,
            config,
        })
    }

    /// Create a dictionary and bulk-load `words` into it.
    pub fn from_words<I, S>(words: I, config: DictionaryConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new(config)?;
        dictionary.bulk_load(words);
        Ok(dictionary)
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    pub fn tree(&self) -> &OrderedWordTree {
        &self.tree
    }

    pub fn filter(&self) -> &HashFilter {
        &self.filter
    }

    /// Insert a word and record its filter slot.
    pub fn add(&mut self, word: &str) {
        self.tree.insert(word);
        self.filter.record_present(word);
    }

    /// Insert every word in order. Duplicates become duplicate nodes.
    ///
    /// Returns the number of words loaded.
    pub fn bulk_load<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0usize;
        for word in words {
            self.add(word.as_ref());
            count += 1;
        }
        info!(
            words = count,
            depth = self.tree.depth(),
            set_bits = self.filter.set_bits(),
            "bulk load finished"
        );
        count
    }

    /// Remove one occurrence of `word` and repair the filter.
    ///
    /// Removing an absent word leaves the tree unchanged and returns
    /// `false`. With [`RemovalStrategy::Reassert`] the filter repair runs
    /// regardless, costing O(size).
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self.tree.remove(word);
        match self.config.removal_strategy {
            RemovalStrategy::Reassert => {
                self.filter.clear_bit(word);
                self.filter.reassert_from_tree(&self.tree);
            }
            RemovalStrategy::BucketCounts => {
                if removed {
                    self.filter.release(word);
                }
            }
        }
        debug!(word, removed, "remove");
        removed
    }

    /// Remove every word matching `pred`.
    ///
    /// The matching words are collected from a traversal first and removed
    /// afterwards, so no traversal is live while the tree changes. Each
    /// matching node is removed once. Returns the number of removals.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let doomed: Vec<String> = self
            .tree
            .iter()
            .filter(|w| pred(w))
            .map(str::to_owned)
            .collect();
        let mut removed = 0;
        for word in &doomed {
            if self.remove(word) {
                removed += 1;
            }
        }
        removed
    }

    /// Authoritative membership test against the tree. O(depth).
    ///
    /// Does not consult the filter.
    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// Filter check only: `false` means definitely absent.
    pub fn may_contain(&self, word: &str) -> bool {
        self.filter.may_contain(word)
    }

    pub fn size(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Collect shape and filter diagnostics.
    pub fn stats(&self, fill_rate_interval: usize) -> Result<DictionaryStats> {
        Ok(DictionaryStats {
            size: self.tree.size(),
            depth: self.tree.depth(),
            depth_histogram: self.tree.depth_histogram(),
            average_depth: self.tree.average_depth().ok(),
            min: self.tree.min().ok().map(str::to_owned),
            max: self.tree.max().ok().map(str::to_owned),
            set_bits: self.filter.set_bits(),
            filter_capacity: self.filter.capacity(),
            fill_rate_interval,
            fill_rate: self.filter.fill_rate_histogram(fill_rate_interval)?,
        })
    }
}
