use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Input file used when the caller does not name one.
pub const DEFAULT_INPUT: &str = "vpl.in";

/// Binary looked up on `PATH` when no override is given.
pub const DEFAULT_PROGRAM: &str = "vplanet";

/// The external simulator executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    pub program: PathBuf,
}

impl Simulator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program path to hand to the child.
    ///
    /// The child runs in the input's directory, so a relative path with a
    /// separator is pinned to the caller's working directory first. Bare names
    /// go through `PATH`.
    pub fn resolved_program(&self) -> PathBuf {
        let program = self.program.as_path();
        if program.is_relative() && program.components().count() > 1 {
            std::path::absolute(program).unwrap_or_else(|_| program.to_path_buf())
        } else {
            program.to_path_buf()
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

/// Everything one orchestrated run needs. Immutable once built.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
    /// Run even if a result log already exists.
    pub clobber: bool,
    /// Ask the result loader for unit-ful output.
    pub units: bool,
    pub simulator: Simulator,
}

impl RunRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            verbose: false,
            quiet: false,
            clobber: false,
            units: true,
            simulator: Simulator::default(),
        }
    }

    /// Directory holding the input file; the simulator runs there and writes its output there.
    pub fn directory(&self) -> PathBuf {
        match self.input.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => std::path::absolute(parent).unwrap_or_else(|_| parent.to_path_buf()),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

impl Default for RunRequest {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

/// A fully resolved child process command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    /// Arguments after the program name.
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// What came back from a child process. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct ProcessResult {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// One per-body forward evolution file written next to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardFile {
    pub body: String,
    pub path: PathBuf,
}

/// Results of a run as found on disk by [`crate::output::LogDirLoader`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub directory: PathBuf,
    pub system_name: String,
    pub units: bool,
    pub log_path: PathBuf,
    pub log_text: String,
    #[serde(default)]
    pub forward_files: Vec<ForwardFile>,
}

impl Output {
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.forward_files.iter().map(|f| f.body.as_str())
    }
}

/// Loaded results plus how they were obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome<O> {
    pub output: O,
    /// True when the simulator was spawned, false when an existing log was reused.
    pub executed: bool,
    #[serde(with = "humantime_serde", default)]
    pub elapsed: Option<Duration>,
    pub finished_utc: String,
}
