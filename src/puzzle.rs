//! Puzzle configuration and the word validity check.
//!
//! A word is valid when it is long enough, no longer than the pool, contains
//! the mandatory letter, and can be spelled by consuming letters from the pool
//! without using any pool letter twice.

use crate::error::PuzzleError;
use std::fmt;

/// Number of letters in every puzzle pool.
pub const POOL_SIZE: usize = 9;

/// Minimum word size used when none is given.
pub const DEFAULT_SIZE: usize = 4;

/// The nine letters a word has to be built from. Duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPool([u8; POOL_SIZE]);

impl LetterPool {
    /// Parse a pool from operator input.
    ///
    /// Strict mode accepts only lowercase ASCII letters. Lenient mode also
    /// accepts uppercase ones and stores them lowercased.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLetters` unless `s` is exactly nine
    /// acceptable letters.
    pub fn parse(s: &str, lenient: bool) -> Result<Self, PuzzleError> {
        let bytes = s.as_bytes();
        if bytes.len() != POOL_SIZE || !bytes.iter().all(|&b| is_accepted_letter(b, lenient)) {
            return Err(PuzzleError::InvalidLetters(s.to_string()));
        }
        let mut letters = [0u8; POOL_SIZE];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Always ASCII by construction.
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

fn is_accepted_letter(b: u8, lenient: bool) -> bool {
    if lenient {
        b.is_ascii_alphabetic()
    } else {
        b.is_ascii_lowercase()
    }
}

/// Parse the mandatory letter. The argument must be exactly one letter.
///
/// # Errors
/// Returns `PuzzleError::InvalidMandatory` for empty input, more than one
/// character, or anything that is not an acceptable letter.
pub fn parse_mandatory(s: &str, lenient: bool) -> Result<u8, PuzzleError> {
    match s.as_bytes() {
        [b] if is_accepted_letter(*b, lenient) => Ok(b.to_ascii_lowercase()),
        _ => Err(PuzzleError::InvalidMandatory(s.to_string())),
    }
}

/// Check the minimum word size is within `1..=9`.
///
/// # Errors
/// Returns `PuzzleError::InvalidSize` when out of range.
pub fn parse_size(size: i64) -> Result<usize, PuzzleError> {
    match usize::try_from(size) {
        Ok(n) if (1..=POOL_SIZE).contains(&n) => Ok(n),
        _ => Err(PuzzleError::InvalidSize(size)),
    }
}

/// Why a word was turned down. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    TooLong,
    MissingMandatory,
    UnavailableLetter(u8),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "shorter than minimum size"),
            Self::TooLong => write!(f, "longer than {POOL_SIZE} letters"),
            Self::MissingMandatory => write!(f, "missing mandatory letter"),
            Self::UnavailableLetter(b) => {
                write!(f, "letter '{}' not available", b.escape_ascii())
            }
        }
    }
}

/// Immutable puzzle settings, built once and shared by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pool: LetterPool,
    mandatory: u8,
    min_size: usize,
}

impl Puzzle {
    #[must_use]
    pub fn new(pool: LetterPool, mandatory: u8, min_size: usize) -> Self {
        Self {
            pool,
            mandatory,
            min_size,
        }
    }

    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    #[must_use]
    pub fn mandatory(&self) -> u8 {
        self.mandatory
    }

    #[must_use]
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    #[must_use]
    pub fn is_valid_word(&self, word: &[u8]) -> bool {
        self.rejection(word).is_none()
    }

    #[must_use]
    pub fn rejection(&self, word: &[u8]) -> Option<Rejection> {
        check_word(self.min_size, self.mandatory, self.pool.letters(), word)
    }
}

/// Returns true if `word` can be made from `letters` under the puzzle rules.
#[must_use]
pub fn is_valid_word(size: usize, mandatory: u8, letters: &[u8], word: &[u8]) -> bool {
    check_word(size, mandatory, letters, word).is_none()
}

/// Remove the element at `index`, keeping the rest in order.
///
/// # Panics
/// Panics if `index` is out of bounds.
pub fn remove_index(letters: &mut Vec<u8>, index: usize) {
    letters.remove(index);
}

fn check_word(size: usize, mandatory: u8, letters: &[u8], word: &[u8]) -> Option<Rejection> {
    if word.len() < size {
        return Some(Rejection::TooShort);
    }
    if word.len() > POOL_SIZE {
        return Some(Rejection::TooLong);
    }
    if !word.contains(&mandatory) {
        return Some(Rejection::MissingMandatory);
    }
    // Each matched letter is consumed so it cannot be used twice.
    let mut working = letters.to_vec();
    for &letter in word {
        match working.iter().position(|&c| c == letter) {
            Some(i) => remove_index(&mut working, i),
            None => return Some(Rejection::UnavailableLetter(letter)),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 4;
    const MANDATORY: u8 = b'c';
    const LETTERS: &[u8] = b"adevcrsoi";

    fn puzzle() -> Puzzle {
        Puzzle::new(LetterPool::parse("adevcrsoi", false).unwrap(), MANDATORY, SIZE)
    }

    #[test]
    fn test_word_too_short() {
        assert!(!is_valid_word(SIZE, MANDATORY, LETTERS, b"ice"));
        assert_eq!(puzzle().rejection(b"ice"), Some(Rejection::TooShort));
    }

    #[test]
    fn test_word_too_long() {
        assert!(!is_valid_word(SIZE, MANDATORY, LETTERS, b"adevcrsoix"));
        assert!(!is_valid_word(SIZE, MANDATORY, LETTERS, b"adevcrsoiX"));
        assert_eq!(puzzle().rejection(b"adevcrsoix"), Some(Rejection::TooLong));
    }

    #[test]
    fn test_too_long_regardless_of_pool() {
        let pool = b"cccccccccccc";
        assert!(!is_valid_word(1, b'c', pool, b"cccccccccc"));
    }

    #[test]
    fn test_valid_word() {
        assert!(is_valid_word(SIZE, MANDATORY, LETTERS, b"voice"));
        assert!(puzzle().is_valid_word(b"voice"));
    }

    #[test]
    fn test_whole_pool_is_valid() {
        assert!(puzzle().is_valid_word(b"adevcrsoi"));
        assert!(puzzle().is_valid_word(b"iosrcveda"));
    }

    #[test]
    fn test_letter_not_in_pool() {
        assert!(!is_valid_word(SIZE, MANDATORY, LETTERS, b"voicex"));
        assert_eq!(
            puzzle().rejection(b"voicex"),
            Some(Rejection::UnavailableLetter(b'x'))
        );
    }

    #[test]
    fn test_missing_mandatory() {
        assert!(!is_valid_word(SIZE, MANDATORY, LETTERS, b"dive"));
        assert_eq!(puzzle().rejection(b"dove"), Some(Rejection::MissingMandatory));
    }

    #[test]
    fn test_case_sensitive_words() {
        assert!(!puzzle().is_valid_word(b"VOICE"));
        assert!(!puzzle().is_valid_word(b"Voice"));
    }

    #[test]
    fn test_pool_letters_are_consumed() {
        let letters = b"aabcdefgh";
        assert!(is_valid_word(3, b'a', letters, b"aab"));
        assert!(!is_valid_word(3, b'a', letters, b"aabb"));
        assert!(!is_valid_word(3, b'a', letters, b"aaab"));
    }

    #[test]
    fn test_single_s_cannot_spell_sass() {
        assert!(!is_valid_word(4, b's', b"sabcdefgh", b"sass"));
        assert!(is_valid_word(4, b's', b"sassdefgh", b"sass"));
    }

    #[test]
    fn test_empty_word_is_rejected() {
        assert!(!is_valid_word(1, MANDATORY, LETTERS, b""));
        assert_eq!(puzzle().rejection(b""), Some(Rejection::TooShort));
    }

    #[test]
    fn test_non_ascii_bytes_are_rejected() {
        assert!(!puzzle().is_valid_word("voicé".as_bytes()));
        assert!(!puzzle().is_valid_word(&[b'c', 0xff, b'a', b'd']));
    }

    #[test]
    fn test_remove_index() {
        let mut letters = b"abc".to_vec();
        remove_index(&mut letters, 0);
        assert_eq!(letters, b"bc");
    }

    #[test]
    fn test_remove_index_preserves_order() {
        let mut letters = b"abcde".to_vec();
        remove_index(&mut letters, 2);
        assert_eq!(letters, b"abde");
        remove_index(&mut letters, 3);
        assert_eq!(letters, b"abd");
    }

    #[test]
    fn test_letters_valid() {
        let pool = LetterPool::parse("adevcrsoi", false).unwrap();
        assert_eq!(pool.letters(), b"adevcrsoi");
        assert_eq!(pool.to_string(), "adevcrsoi");
    }

    #[test]
    fn test_letters_with_duplicates_valid() {
        assert!(LetterPool::parse("aabcdefgh", false).is_ok());
    }

    #[test]
    fn test_letters_invalid() {
        assert!(LetterPool::parse("adevcrSoi", false).is_err());
        assert!(LetterPool::parse("adevcrs0i", false).is_err());
        assert!(LetterPool::parse("adevcrs i", false).is_err());
        assert!(LetterPool::parse("adevcrsoé", false).is_err());
    }

    #[test]
    fn test_letters_wrong_length() {
        assert!(LetterPool::parse("adevcrsoix", false).is_err());
        assert!(LetterPool::parse("adevcrso", false).is_err());
        assert!(LetterPool::parse("", false).is_err());
    }

    #[test]
    fn test_letters_lenient_lowercases() {
        let pool = LetterPool::parse("ADEVcrSOI", true).unwrap();
        assert_eq!(pool.letters(), b"adevcrsoi");
        assert!(LetterPool::parse("adevcrs0i", true).is_err());
    }

    #[test]
    fn test_mandatory_good() {
        assert_eq!(parse_mandatory("c", false).unwrap(), b'c');
    }

    #[test]
    fn test_mandatory_bad() {
        assert!(matches!(
            parse_mandatory("xx", false),
            Err(PuzzleError::InvalidMandatory(s)) if s == "xx"
        ));
        assert!(parse_mandatory("$", false).is_err());
        assert!(parse_mandatory("", false).is_err());
        assert!(parse_mandatory("C", false).is_err());
    }

    #[test]
    fn test_mandatory_lenient() {
        assert_eq!(parse_mandatory("C", true).unwrap(), b'c');
        assert!(parse_mandatory("7", true).is_err());
    }

    #[test]
    fn test_size_range() {
        assert_eq!(parse_size(1).unwrap(), 1);
        assert_eq!(parse_size(9).unwrap(), 9);
        assert!(matches!(parse_size(0), Err(PuzzleError::InvalidSize(0))));
        assert!(matches!(parse_size(10), Err(PuzzleError::InvalidSize(10))));
        assert!(matches!(parse_size(-3), Err(PuzzleError::InvalidSize(-3))));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::UnavailableLetter(b'x').to_string(),
            "letter 'x' not available"
        );
        assert_eq!(Rejection::TooLong.to_string(), "longer than 9 letters");
    }
}
