// Diagnostics go to stderr so they never mix with the word list on stdout.

use env_logger::{Builder, Env, Target};

/// Install the global logger. `RUST_LOG` overrides the default level, which
/// is `info` in verbose mode and `warn` otherwise.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();
}
