// Edit-distance-1 candidate generators
//
// Each family is a pure function of the word and (where letters are added or
// replaced) the alphabet. Output order is deterministic: positions left to
// right, and alphabet order within a position. Candidates are not
// de-duplicated.

use ordbok_core::{Alphabet, EditKind};

use crate::{DictError, Result};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One family of edit-distance-1 candidates.
pub trait CandidateGenerator {
    /// Which edit this generator applies.
    fn kind(&self) -> EditKind;

    /// Produce every candidate for `word`.
    fn generate(&self, word: &[char], alphabet: &Alphabet) -> Result<Vec<String>>;
}

/// The generator for one edit kind.
pub fn generator_for(kind: EditKind) -> Box<dyn CandidateGenerator> {
    match kind {
        EditKind::Transposition => Box::new(Transposition),
        EditKind::Substitution => Box::new(Substitution),
        EditKind::Deletion => Box::new(Deletion),
        EditKind::Insertion => Box::new(Insertion),
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent characters.
///
/// Yields `len - 1` candidates (none for words shorter than two
/// characters). Equal neighbours produce the original word back.
pub struct Transposition;

impl CandidateGenerator for Transposition {
    fn kind(&self) -> EditKind {
        EditKind::Transposition
    }

    fn generate(&self, word: &[char], _alphabet: &Alphabet) -> Result<Vec<String>> {
        let wlen = word.len();
        let mut out = Vec::with_capacity(wlen.saturating_sub(1));
        let mut buffer = word.to_vec();
        for i in 1..wlen {
            buffer.swap(i - 1, i);
            out.push(buffer.iter().collect());
            buffer.swap(i - 1, i);
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace each character with every alphabet letter, skipping the
/// replacement that rebuilds the original word.
///
/// Yields `len * A - len` candidates when every character of the word is in
/// the alphabet; a position holding a foreign character contributes all `A`
/// letters.
pub struct Substitution;

impl CandidateGenerator for Substitution {
    fn kind(&self) -> EditKind {
        EditKind::Substitution
    }

    fn generate(&self, word: &[char], alphabet: &Alphabet) -> Result<Vec<String>> {
        let wlen = word.len();
        let mut out = Vec::with_capacity(wlen * alphabet.len());
        let mut buffer = word.to_vec();
        for i in 0..wlen {
            for &letter in alphabet.letters() {
                if letter == word[i] {
                    continue;
                }
                buffer[i] = letter;
                out.push(buffer.iter().collect());
            }
            buffer[i] = word[i];
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Drop each character once.
///
/// Yields exactly `len` candidates of length `len - 1`. An empty word has
/// no position to delete and is rejected.
pub struct Deletion;

impl CandidateGenerator for Deletion {
    fn kind(&self) -> EditKind {
        EditKind::Deletion
    }

    fn generate(&self, word: &[char], _alphabet: &Alphabet) -> Result<Vec<String>> {
        let wlen = word.len();
        if wlen == 0 {
            return Err(DictError::InvalidInput(
                "cannot generate deletions of an empty word".to_string(),
            ));
        }
        let mut out = Vec::with_capacity(wlen);
        let mut buffer = String::with_capacity(wlen);
        for i in 0..wlen {
            buffer.clear();
            buffer.extend(&word[..i]);
            buffer.extend(&word[i + 1..]);
            out.push(buffer.clone());
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every alphabet letter before each position.
///
/// Yields `len * A` candidates of length `len + 1`. Insertion happens before
/// positions `0..len`; appending after the last character is not one of
/// them.
pub struct Insertion;

impl CandidateGenerator for Insertion {
    fn kind(&self) -> EditKind {
        EditKind::Insertion
    }

    fn generate(&self, word: &[char], alphabet: &Alphabet) -> Result<Vec<String>> {
        let wlen = word.len();
        let mut out = Vec::with_capacity(wlen * alphabet.len());
        let mut buffer = String::with_capacity(wlen + 1);
        for i in 0..wlen {
            for &letter in alphabet.letters() {
                buffer.clear();
                buffer.extend(&word[..i]);
                buffer.push(letter);
                buffer.extend(&word[i..]);
                out.push(buffer.clone());
            }
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Convenience wrappers over &str
// ---------------------------------------------------------------------------

fn chars(word: &str) -> Vec<char> {
    word.chars().collect()
}

/// Adjacent-character swaps of `word`.
pub fn transpositions(word: &str) -> Vec<String> {
    Transposition
        .generate(&chars(word), &Alphabet::default())
        .unwrap_or_default()
}

/// Single-letter substitutions of `word` over `alphabet`.
pub fn substitutions(word: &str, alphabet: &Alphabet) -> Vec<String> {
    Substitution
        .generate(&chars(word), alphabet)
        .unwrap_or_default()
}

/// Single-character deletions of `word`. Fails on an empty word.
pub fn deletions(word: &str) -> Result<Vec<String>> {
    Deletion.generate(&chars(word), &Alphabet::default())
}

/// Single-letter insertions into `word` over `alphabet`.
pub fn insertions(word: &str, alphabet: &Alphabet) -> Vec<String> {
    Insertion
        .generate(&chars(word), alphabet)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> Alphabet {
        Alphabet::latin()
    }

    // -------------------------------------------------------------------------
    // counts for "cat" over a 26-letter alphabet
    // -------------------------------------------------------------------------

    #[test]
    fn cat_transpositions() {
        assert_eq!(transpositions("cat"), vec!["act", "cta"]);
    }

    #[test]
    fn cat_substitutions_count() {
        let out = substitutions("cat", &latin());
        assert_eq!(out.len(), 75);
        assert!(!out.contains(&"cat".to_string()));
        assert!(out.contains(&"bat".to_string()));
        assert!(out.contains(&"cot".to_string()));
        assert!(out.contains(&"cab".to_string()));
    }

    #[test]
    fn cat_deletions() {
        assert_eq!(deletions("cat").unwrap(), vec!["at", "ct", "ca"]);
    }

    #[test]
    fn cat_insertions_count() {
        let out = insertions("cat", &latin());
        assert_eq!(out.len(), 78);
        assert_eq!(out[0], "acat");
        assert_eq!(out[26], "caat");
        assert_eq!(out[77], "cazt");
        assert!(out.iter().all(|c| c.chars().count() == 4));
    }

    // -------------------------------------------------------------------------
    // edge cases
    // -------------------------------------------------------------------------

    #[test]
    fn transpositions_keep_duplicates_for_equal_neighbours() {
        assert_eq!(transpositions("aab"), vec!["aab", "aba"]);
    }

    #[test]
    fn transpositions_of_single_char_is_empty() {
        assert!(transpositions("a").is_empty());
        assert!(transpositions("").is_empty());
    }

    #[test]
    fn deletions_of_empty_word_fail() {
        assert!(matches!(deletions(""), Err(DictError::InvalidInput(_))));
    }

    #[test]
    fn deletion_of_single_char_gives_empty_string() {
        assert_eq!(deletions("a").unwrap(), vec![""]);
    }

    #[test]
    fn substitution_with_foreign_character_uses_every_letter() {
        // '1' is not in the alphabet, so no substitution at that position is skipped.
        let out = substitutions("a1", &latin());
        assert_eq!(out.len(), 25 + 26);
    }

    #[test]
    fn substitutions_follow_alphabet_order() {
        let alphabet = Alphabet::new("xyz").unwrap();
        assert_eq!(substitutions("y", &alphabet), vec!["x", "z"]);
    }

    #[test]
    fn generators_handle_non_ascii_letters() {
        let alphabet = Alphabet::norwegian();
        let out = substitutions("bl\u{00E5}", &alphabet);
        assert_eq!(out.len(), 3 * 29 - 3);
        assert!(out.contains(&"bl\u{00E6}".to_string()));
        assert_eq!(deletions("bl\u{00E5}").unwrap(), vec!["l\u{00E5}", "b\u{00E5}", "bl"]);
        assert_eq!(transpositions("\u{00F8}l"), vec!["l\u{00F8}"]);
    }

    #[test]
    fn generator_for_matches_kind() {
        for kind in EditKind::ALL {
            assert_eq!(generator_for(kind).kind(), kind);
        }
    }

    #[test]
    fn generators_are_deterministic() {
        let alphabet = Alphabet::norwegian();
        let word: Vec<char> = "hus".chars().collect();
        for kind in EditKind::ALL {
            let g = generator_for(kind);
            assert_eq!(
                g.generate(&word, &alphabet).unwrap(),
                g.generate(&word, &alphabet).unwrap()
            );
        }
    }
}
