// Library interface for wordpuzzle
// The binary and the integration tests share these modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod puzzle;

pub use dictionary::{ScanSummary, Tokens, filter_words, open_dictionary};
pub use error::PuzzleError;
pub use puzzle::{LetterPool, Puzzle, Rejection, is_valid_word, remove_index};
