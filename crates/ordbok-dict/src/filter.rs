// Fixed-capacity membership filter keyed by a polynomial string hash
//
// A set bit means "some word with this hash may be present"; a clear bit
// means "no word with this hash is present". The filter is a fast reject
// for candidates and is never authoritative for presence.

use bit_vec::BitVec;
use ordbok_core::{FilterProbe, RemovalStrategy};
use tracing::debug;

use crate::tree::OrderedWordTree;
use crate::{DictError, Result};

/// Default number of slots.
pub const DEFAULT_CAPACITY: usize = 150_000;

/// Multiplier of the Horner polynomial.
const HASH_MULTIPLIER: i32 = 37;

/// Hash a word into `0..capacity`.
///
/// Horner's rule over the UTF-16 code units of the word, starting from 1,
/// in wrapping 32-bit signed arithmetic; the remainder modulo `capacity` is
/// taken and its absolute value returned.
///
/// `capacity` must be in `1..=i32::MAX` (checked by [`HashFilter::new`]).
pub fn hash_word(word: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0 && capacity <= i32::MAX as usize);
    let mut hash: i32 = 1;
    for unit in word.encode_utf16() {
        hash = hash
            .wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit));
    }
    (hash % capacity as i32).unsigned_abs() as usize
}

/// Membership filter over a fixed number of slots.
///
/// With [`RemovalStrategy::BucketCounts`] a per-slot reference count is
/// kept alongside the bits, so a slot is cleared only once every word that
/// hashed to it has been released.
#[derive(Debug, Clone)]
pub struct HashFilter {
    bits: BitVec,
    counts: Option<Vec<u32>>,
}

impl HashFilter {
    /// Create an empty filter with `capacity` slots.
    pub fn new(capacity: usize, strategy: RemovalStrategy) -> Result<Self> {
        if capacity == 0 || capacity > i32::MAX as usize {
            return Err(DictError::InvalidConfig(format!(
                "filter capacity must be in 1..={}, got {capacity}",
                i32::MAX
            )));
        }
        let counts = match strategy {
            RemovalStrategy::Reassert => None,
            RemovalStrategy::BucketCounts => Some(vec![0; capacity]),
        };
        Ok(Self {
            bits: BitVec::from_elem(capacity, false),
            counts,
        })
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn strategy(&self) -> RemovalStrategy {
        if self.counts.is_some() {
            RemovalStrategy::BucketCounts
        } else {
            RemovalStrategy::Reassert
        }
    }

    /// Slot index of `word` in this filter.
    pub fn hash(&self, word: &str) -> usize {
        hash_word(word, self.capacity())
    }

    /// Mark `word` as present.
    pub fn record_present(&mut self, word: &str) {
        let slot = self.hash(word);
        self.bits.set(slot, true);
        if let Some(counts) = &mut self.counts {
            counts[slot] = counts[slot].saturating_add(1);
        }
    }

    /// Clear the slot of `word` unconditionally.
    ///
    /// Other present words may share the slot, so this alone can introduce
    /// false negatives; follow it with [`reassert_from_tree`](Self::reassert_from_tree).
    pub fn clear_bit(&mut self, word: &str) {
        let slot = self.hash(word);
        self.bits.set(slot, false);
        if let Some(counts) = &mut self.counts {
            counts[slot] = 0;
        }
    }

    /// Drop one reference to the slot of `word`, clearing it when no
    /// reference is left.
    ///
    /// Without bucket counts there is no way to know whether the slot is
    /// shared, so this behaves like [`clear_bit`](Self::clear_bit).
    pub fn release(&mut self, word: &str) {
        let slot = self.hash(word);
        match &mut self.counts {
            Some(counts) => {
                counts[slot] = counts[slot].saturating_sub(1);
                if counts[slot] == 0 {
                    self.bits.set(slot, false);
                }
            }
            None => self.bits.set(slot, false),
        }
    }

    /// Recompute every slot from the tree's current contents.
    ///
    /// Afterwards exactly the slots of words still in the tree are set.
    /// O(capacity + size).
    pub fn reassert_from_tree(&mut self, tree: &OrderedWordTree) {
        self.bits = BitVec::from_elem(self.capacity(), false);
        if let Some(counts) = &mut self.counts {
            counts.iter_mut().for_each(|c| *c = 0);
        }
        let mut words = 0usize;
        for word in tree.iter() {
            self.record_present(word);
            words += 1;
        }
        debug!(words, set_bits = self.set_bits(), "reasserted hash filter");
    }

    /// `false` means definitely absent; `true` means verify with the tree.
    pub fn may_contain(&self, word: &str) -> bool {
        self.bits.get(self.hash(word)).unwrap_or(false)
    }

    pub fn probe(&self, word: &str) -> FilterProbe {
        FilterProbe::from(self.may_contain(word))
    }

    /// Number of set slots.
    pub fn set_bits(&self) -> usize {
        self.bits.iter().filter(|b| *b).count()
    }

    /// Distribution of set bits over fixed windows.
    ///
    /// The slots are cut into `capacity / interval_size` consecutive windows
    /// of `interval_size` slots (a trailing partial window is ignored). Entry
    /// `k` of the result is the number of windows with exactly `k` set bits,
    /// so the result has `interval_size + 1` entries.
    ///
    /// `interval_size` must be in `1..=capacity`.
    pub fn fill_rate_histogram(&self, interval_size: usize) -> Result<Vec<usize>> {
        if interval_size == 0 || interval_size > self.capacity() {
            return Err(DictError::InvalidInput(format!(
                "fill-rate interval size must be in 1..={}, got {interval_size}",
                self.capacity()
            )));
        }
        let windows = self.capacity() / interval_size;
        let mut histogram = vec![0usize; interval_size + 1];
        let mut bits = self.bits.iter();
        for _ in 0..windows {
            let set = bits.by_ref().take(interval_size).filter(|b| *b).count();
            histogram[set] += 1;
        }
        Ok(histogram)
    }
}

impl Default for HashFilter {
    fn default() -> Self {
        Self {
            bits: BitVec::from_elem(DEFAULT_CAPACITY, false),
            counts: None,
        }
    }
}
