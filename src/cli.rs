use crate::dictionary::DEFAULT_DICTIONARY;
use crate::error::PuzzleError;
use crate::puzzle::{DEFAULT_SIZE, LetterPool, Puzzle, parse_mandatory, parse_size};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long option names that may also be written with a single dash.
const LONG_NAMES: &[&str] = &[
    "dictionary",
    "letters",
    "mandatory",
    "size",
    "lenient",
    "verbose",
    "version",
    "help",
];

/// wordpuzzle command line options
#[derive(Parser, Debug)]
#[command(name = "wordpuzzle", version, about, long_about = None)]
pub struct Cli {
    /// Dictionary to read words from
    #[arg(short, long, default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Nine letters to make words
    #[arg(short, long)]
    pub letters: Option<String>,

    /// Mandatory character for all words
    #[arg(short, long)]
    pub mandatory: Option<String>,

    /// Minimum word size (value from 1..9)
    #[arg(short, long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
    pub size: i64,

    /// Accept upper-case letters and mandatory, converting them to lower case
    #[arg(long)]
    pub lenient: bool,

    /// Verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Other arguments (shown in verbose mode)
    pub other: Vec<String>,
}

impl Cli {
    /// Validate the raw arguments into puzzle settings.
    ///
    /// Letters are checked first, then the mandatory letter, then the size,
    /// and the first problem found is returned.
    ///
    /// # Errors
    /// Returns a configuration `PuzzleError` naming the offending value.
    pub fn puzzle(&self) -> Result<Puzzle, PuzzleError> {
        let pool = LetterPool::parse(self.letters.as_deref().unwrap_or_default(), self.lenient)?;
        let mandatory = parse_mandatory(self.mandatory.as_deref().unwrap_or_default(), self.lenient)?;
        let size = parse_size(self.size)?;
        Ok(Puzzle::new(pool, mandatory, size))
    }

    /// Resolved settings as shown in verbose mode.
    #[must_use]
    pub fn describe(&self, puzzle: &Puzzle) -> String {
        format!(
            "dictionary: {}\nletters: {}\nmandatory: {}\nsize: {}\nother arguments: {:?}\n",
            self.dictionary.display(),
            puzzle.pool(),
            char::from(puzzle.mandatory()),
            puzzle.min_size(),
            self.other,
        )
    }
}

/// Parse command line arguments, accepting `-name` as well as `--name`.
///
/// # Errors
/// Returns the clap error for unknown options or malformed values, and for
/// help and version requests.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_args(args))
}

#[must_use]
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Rewrite single-dash long options (`-letters`, `-size=5`) to the double
/// dash form clap expects. The program name and anything after `--` are
/// left alone, as are short options and their attached values.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut positional_only = false;
    for arg in args {
        if positional_only || arg == "--" {
            positional_only = true;
            normalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some(s) if is_single_dash_long(s) => normalized.push(format!("-{s}").into()),
            _ => normalized.push(arg),
        }
    }
    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_NAMES.contains(&name)
}
