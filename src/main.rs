mod cli;
mod text_summary;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    vplanet_run::logging::initialize_logging(args.verbose, args.quiet);
    let is_quiet = args.quiet;

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            if is_quiet {
                // Keep the failure visible even though logging is turned down.
                eprintln!("{e:#}");
                std::process::exit(1);
            } else {
                Err(e)
            }
        }
    }
}
