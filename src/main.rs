use clap::error::ErrorKind;
use std::io::{self, BufWriter};
use std::process::ExitCode;
use wordpuzzle::cli::{Cli, parse_cli_from, usage};
use wordpuzzle::{PuzzleError, filter_words, logging, open_dictionary};

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();
    // No arguments at all: show usage rather than complain about missing letters.
    if args.len() <= 1 {
        eprint!("{}", usage());
        return ExitCode::SUCCESS;
    }
    let cli = match parse_cli_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream stopped reading (`| head`); nothing left to report.
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_configuration() {
                eprint!("{}", usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PuzzleError> {
    let puzzle = cli.puzzle()?;
    if cli.verbose {
        eprint!("{}", cli.describe(&puzzle));
    }
    let dictionary = open_dictionary(&cli.dictionary)?;
    let stdout = io::stdout();
    filter_words(&puzzle, dictionary, BufWriter::new(stdout.lock()))?;
    Ok(())
}
