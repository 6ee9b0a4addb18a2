use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid letters '{0}': expected 9 lowercase letters")]
    InvalidLetters(String),

    #[error("invalid mandatory '{0}': expected a single lowercase letter")]
    InvalidMandatory(String),

    #[error("invalid size {0}: expected a value from 1 to 9")]
    InvalidSize(i64),

    #[error("cannot open dictionary '{}': {source}", .path.display())]
    DictionaryOpen { path: PathBuf, source: io::Error },

    #[error("failed reading dictionary: {source}")]
    DictionaryRead { source: io::Error },

    #[error("failed writing words: {source}")]
    Output { source: io::Error },
}

impl PuzzleError {
    /// True for errors the operator can fix by changing the arguments.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidLetters(_) | Self::InvalidMandatory(_) | Self::InvalidSize(_)
        )
    }

    /// True when the reader of our output went away, e.g. `wordpuzzle | head`.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}
