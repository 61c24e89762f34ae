//! Captures the simulator's own `-h` text.

use std::fmt;

use crate::error::{Error, Result};
use crate::model::{Invocation, Simulator};
use crate::orchestrator::Launcher;

/// Help text printed by `<binary> -h`, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorHelp {
    text: String,
}

impl SimulatorHelp {
    /// Run `<binary> -h` once and capture its standard output.
    pub fn fetch<L: Launcher>(launcher: &L, simulator: &Simulator) -> Result<Self> {
        let invocation = Invocation {
            program: simulator.resolved_program(),
            args: vec!["-h".to_string()],
            working_dir: std::env::current_dir().unwrap_or_else(|_| ".".into()),
        };
        let result = launcher
            .launch(&invocation)
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        if !result.success {
            return Err(Error::HelpFailed { code: result.code });
        }
        Ok(Self {
            text: String::from_utf8_lossy(&result.stdout).into_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SimulatorHelp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
