//! Run lifecycle controller.
//!
//! START -> SCANNED -> {SKIP, INVOKE} -> LOADED | FAILED. Every call scans the
//! input, runs the simulator at most once, then hands off to the loader.

use std::time::Instant;

use log::info;

use super::invoker::{invoke, Launcher};
use super::post_process::{hand_off, ResultLoader};
use crate::error::{Error, Result};
use crate::gate::{self, RunDecision};
use crate::model::{RunOutcome, RunRequest};
use crate::scanner;

/// Owns the process launcher and the result loader for a series of runs.
///
/// Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator<La, Lo> {
    launcher: La,
    loader: Lo,
}

impl<La: Launcher, Lo: ResultLoader> Orchestrator<La, Lo> {
    pub fn new(launcher: La, loader: Lo) -> Self {
        Self { launcher, loader }
    }

    pub fn run(&self, req: &RunRequest) -> Result<RunOutcome<Lo::Output>> {
        let system_name = scanner::scan_system_name(&req.input)?.ok_or_else(|| {
            Error::MissingSystemName {
                path: req.input.clone(),
            }
        })?;
        let dir = req.directory();

        let elapsed = match gate::decide(&dir, &system_name, req.clobber) {
            RunDecision::Skip => {
                info!(
                    "{} already exists, skipping run (use clobber to force)",
                    gate::artifact_path(&dir, &system_name).display()
                );
                None
            }
            RunDecision::Invoke => {
                let started = Instant::now();
                invoke(&self.launcher, req)?;
                let elapsed = started.elapsed();
                info!(
                    "{} finished in {}",
                    system_name,
                    humantime::format_duration(round_millis(elapsed))
                );
                Some(elapsed)
            }
        };

        let output = hand_off(&self.loader, &dir, &system_name, req.units)?;
        Ok(RunOutcome {
            output,
            executed: elapsed.is_some(),
            elapsed,
            finished_utc: time::OffsetDateTime::now_utc()
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_else(|_| "now".into()),
        })
    }
}

/// Drop sub-millisecond noise before formatting a duration.
pub fn round_millis(d: std::time::Duration) -> std::time::Duration {
    std::time::Duration::from_millis(d.as_millis() as u64)
}
