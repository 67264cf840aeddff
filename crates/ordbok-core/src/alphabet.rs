// Alphabet definition and letter classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Norwegian alphabet: a-z followed by æ ø å.
pub const NORWEGIAN_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz\u{00E6}\u{00F8}\u{00E5}";

/// Plain Latin alphabet: a-z.
pub const LATIN_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Error returned when an alphabet cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet must contain at least one letter")]
    Empty,
    #[error("alphabet entry {0:?} is whitespace")]
    Whitespace(char),
}

/// An ordered set of letters used to generate substitution and insertion
/// candidates.
///
/// Order is preserved exactly as given, so candidate generation is
/// deterministic for a given alphabet. Repeated letters are dropped (first
/// occurrence wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters.
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let mut out: Vec<char> = Vec::with_capacity(letters.len());
        for c in letters.chars() {
            if c.is_whitespace() {
                return Err(AlphabetError::Whitespace(c));
            }
            if !out.contains(&c) {
                out.push(c);
            }
        }
        if out.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { letters: out })
    }

    /// The 29-letter Norwegian alphabet.
    pub fn norwegian() -> Self {
        Self {
            letters: NORWEGIAN_LETTERS.chars().collect(),
        }
    }

    /// The 26-letter Latin alphabet.
    pub fn latin() -> Self {
        Self {
            letters: LATIN_LETTERS.chars().collect(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Returns `true` if `word` is non-empty and made only of this
    /// alphabet's letters.
    pub fn is_word(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::norwegian()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Alphabet::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

/// Normalize a user-supplied token: trim surrounding whitespace and
/// lowercase it.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norwegian_alphabet_has_29_letters() {
        let a = Alphabet::norwegian();
        assert_eq!(a.len(), 29);
        assert!(a.contains('\u{00E6}'));
        assert!(a.contains('\u{00F8}'));
        assert!(a.contains('\u{00E5}'));
        assert_eq!(a.letters()[0], 'a');
        assert_eq!(a.letters()[28], '\u{00E5}');
    }

    #[test]
    fn default_is_norwegian() {
        assert_eq!(Alphabet::default(), Alphabet::norwegian());
    }

    #[test]
    fn latin_alphabet_has_26_letters() {
        assert_eq!(Alphabet::latin().len(), 26);
        assert!(!Alphabet::latin().contains('\u{00E5}'));
    }

    #[test]
    fn new_drops_repeated_letters() {
        let a = Alphabet::new("abca").unwrap();
        assert_eq!(a.letters(), &['a', 'b', 'c']);
    }

    #[test]
    fn new_rejects_empty_and_whitespace() {
        assert_eq!(Alphabet::new(""), Err(AlphabetError::Empty));
        assert_eq!(Alphabet::new("a b"), Err(AlphabetError::Whitespace(' ')));
    }

    #[test]
    fn is_word_requires_alphabet_letters() {
        let a = Alphabet::latin();
        assert!(a.is_word("cat"));
        assert!(!a.is_word(""));
        assert!(!a.is_word("c4t"));
        assert!(!a.is_word("bl\u{00E5}"));
        assert!(Alphabet::norwegian().is_word("bl\u{00E5}"));
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Familie\n"), "familie");
        assert_eq!(normalize("\u{00C6}RE"), "\u{00E6}re");
    }

    #[test]
    fn serde_round_trips_as_string() {
        let a = Alphabet::new("xyz").unwrap();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "\"xyz\"");
        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_str::<Alphabet>("\"\"").is_err());
    }
}
