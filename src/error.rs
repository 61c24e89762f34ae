use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the run orchestration.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("failed to read input file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input file declares no `sSystemName`, so there is no result log to look for.
    #[error("no sSystemName directive found in {}", path.display())]
    MissingSystemName { path: PathBuf },
    /// The simulator binary could not be started at all.
    #[error("failed to launch {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The simulator ran and exited with a failure status.
    #[error("error running the simulator")]
    SimulationFailed {
        /// Exit code, absent when the child was killed by a signal.
        code: Option<i32>,
        /// Captured standard error of the child.
        stderr: String,
    },
    /// `<binary> -h` exited abnormally.
    #[error("simulator help exited with {}", describe_code(*code))]
    HelpFailed { code: Option<i32> },
    /// The result loader could not read the expected output.
    #[error("failed to load results from {}", path.display())]
    ResultLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

impl Error {
    pub fn is_simulation_failure(&self) -> bool {
        matches!(self, Error::SimulationFailed { .. })
    }
}
