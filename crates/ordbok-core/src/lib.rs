//! Shared types for the ordbok spell checker.
//!
//! - [`alphabet`] -- the configurable letter set and input classification
//! - [`enums`] -- verdicts, filter probes, candidate classes, strategies

pub mod alphabet;
pub mod enums;

pub use alphabet::{Alphabet, AlphabetError};
pub use enums::{CandidateClass, EditKind, FilterProbe, RemovalStrategy, Verdict};
