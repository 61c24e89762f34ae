//! Everything related to logging.

use log::LevelFilter;

/// Default level for the chosen verbosity; quiet wins over verbose.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes logging to stderr. `RUST_LOG` overrides the default level.
pub fn initialize_logging(verbose: bool, quiet: bool) {
    let default = level_for(verbose, quiet).to_string().to_lowercase();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_target(false)
        .try_init();
}
