//! Run orchestration for the VPLanet simulator.
//!
//! Given an input file, decide whether a fresh run is needed, run the simulator
//! as an isolated child process, and hand the output directory to a result
//! loader. Runs are blocking and single-threaded.

pub mod error;
pub mod gate;
pub mod help;
pub mod logging;
pub mod model;
pub mod orchestrator;
pub mod output;
pub mod scanner;

pub use error::{Error, Result};
pub use help::SimulatorHelp;
pub use model::{Output, RunOutcome, RunRequest, Simulator};
pub use orchestrator::{Orchestrator, ResultLoader, SystemLauncher};
pub use output::LogDirLoader;

/// Run the simulator for `req` if needed and load its output.
///
/// Build `req` with [`RunRequest::new`] (verbose, quiet and clobber off, units on)
/// and override the fields you need.
///
/// Fails with [`Error::SimulationFailed`] when the simulator exits non-zero.
pub fn run(req: &RunRequest) -> Result<Output> {
    Orchestrator::new(SystemLauncher, LogDirLoader)
        .run(req)
        .map(|outcome| outcome.output)
}

/// The simulator's `-h` text.
pub fn help(simulator: &Simulator) -> Result<SimulatorHelp> {
    SimulatorHelp::fetch(&SystemLauncher, simulator)
}
