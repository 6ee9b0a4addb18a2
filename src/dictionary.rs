use crate::error::PuzzleError;
use crate::puzzle::Puzzle;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::mem;
use std::path::Path;

/// Dictionary path used when none is given.
pub const DEFAULT_DICTIONARY: &str = "dictionary";

pub fn open_dictionary<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, PuzzleError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PuzzleError::DictionaryOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Whitespace separated tokens of a reader, in source order.
///
/// A token is yielded as soon as its delimiter has been read, so output can
/// keep pace with input even when the whole dictionary sits on one line.
/// Only the token under construction is held. Tokens are raw bytes; no
/// encoding is assumed.
pub struct Tokens<R> {
    reader: R,
    partial: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            partial: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            if buf.is_empty() {
                self.done = true;
                return (!self.partial.is_empty()).then(|| Ok(mem::take(&mut self.partial)));
            }
            match buf.iter().position(u8::is_ascii_whitespace) {
                Some(end) => {
                    self.partial.extend_from_slice(&buf[..end]);
                    self.reader.consume(end + 1);
                    if !self.partial.is_empty() {
                        return Some(Ok(mem::take(&mut self.partial)));
                    }
                }
                None => {
                    let len = buf.len();
                    self.partial.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub accepted: usize,
}

/// Write every valid word from `reader` to `writer`, one per line.
///
/// Words are written as soon as they are accepted. If reading fails part
/// way through, words already written stay written and are flushed before
/// the error is returned.
pub fn filter_words<R: BufRead, W: Write>(
    puzzle: &Puzzle,
    reader: R,
    mut writer: W,
) -> Result<ScanSummary, PuzzleError> {
    let mut summary = ScanSummary::default();
    for token in Tokens::new(reader) {
        let word = match token {
            Ok(word) => word,
            Err(source) => {
                if let Err(e) = writer.flush() {
                    warn!("could not flush output after read failure: {e}");
                }
                return Err(PuzzleError::DictionaryRead { source });
            }
        };
        summary.scanned += 1;
        match puzzle.rejection(&word) {
            None => {
                writer
                    .write_all(&word)
                    .and_then(|()| writer.write_all(b"\n"))
                    .map_err(|source| PuzzleError::Output { source })?;
                summary.accepted += 1;
            }
            Some(reason) => debug!("rejected '{}': {reason}", word.escape_ascii()),
        }
    }
    writer
        .flush()
        .map_err(|source| PuzzleError::Output { source })?;
    info!(
        "scanned {} words, {} accepted",
        summary.scanned, summary.accepted
    );
    Ok(summary)
}
