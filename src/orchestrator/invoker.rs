//! Runs the simulator out of process.
//!
//! The simulator terminates its whole process on a fatal error, so it is never
//! called in-process: a crash there must only end the child.

use std::io;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Invocation, ProcessResult, RunRequest};

/// Starts a child process and waits for it.
pub trait Launcher {
    fn launch(&self, invocation: &Invocation) -> io::Result<ProcessResult>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn launch(&self, invocation: &Invocation) -> io::Result<ProcessResult> {
        (**self).launch(invocation)
    }
}

/// Launcher backed by `std::process::Command`. Blocks until the child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, invocation: &Invocation) -> io::Result<ProcessResult> {
        let out = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .output()?;
        Ok(ProcessResult {
            success: out.status.success(),
            code: out.status.code(),
            stdout: out.stdout,
            stderr: out.stderr,
        })
    }
}

/// `<input> [-v] [-q]`, run from the input file's directory.
///
/// The input is passed by file name since the child already runs in its directory.
/// Verbose and quiet are appended independently; how they interact is up to the simulator.
pub fn build_invocation(req: &RunRequest) -> Invocation {
    let input = req.input.file_name().unwrap_or(req.input.as_os_str());
    let mut args = vec![input.to_string_lossy().into_owned()];
    if req.verbose {
        args.push("-v".to_string());
    }
    if req.quiet {
        args.push("-q".to_string());
    }
    Invocation {
        program: req.simulator.resolved_program(),
        args,
        working_dir: req.directory(),
    }
}

/// Spawn the simulator exactly once. No retry.
pub fn invoke<L: Launcher>(launcher: &L, req: &RunRequest) -> Result<ProcessResult> {
    let invocation = build_invocation(req);
    info!(
        "running {} {}",
        invocation.program.display(),
        invocation.args.join(" ")
    );
    debug!("working directory: {}", invocation.working_dir.display());

    let result = launcher.launch(&invocation).map_err(|source| Error::Spawn {
        program: invocation.program.clone(),
        source,
    })?;

    if !result.success {
        let stderr = String::from_utf8_lossy(&result.stderr).trim_end().to_string();
        debug!("simulator exited with {:?}; stderr: {}", result.code, stderr);
        return Err(Error::SimulationFailed {
            code: result.code,
            stderr,
        });
    }
    Ok(result)
}
