// Suggestion generation
//
// Produces correction candidates for a misspelled word by applying every
// single edit (transposition, substitution, deletion, insertion) and checks
// each one against a dictionary, filter first.
//
// Architecture:
//   - `generators`: one generator per edit family (CandidateGenerator trait)
//   - `tally`: per-class counters for a batch of classified candidates
//   - `engine`: orchestrator that runs the families and builds a SpellReport

pub mod engine;
pub mod generators;
pub mod tally;

pub use engine::{SpellReport, SuggestionEngine};
pub use generators::{
    CandidateGenerator, deletions, generator_for, insertions, substitutions, transpositions,
};
pub use tally::{ClassCounts, Classification};
