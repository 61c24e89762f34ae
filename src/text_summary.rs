//! Plain-text report of a run: which system, whether the simulator actually
//! ran, and which files it left behind.

use vplanet_run::orchestrator::round_millis;
use vplanet_run::{Output, RunOutcome};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from a finished (or skipped) run.
pub(crate) fn build_text_summary(outcome: &RunOutcome<Output>) -> TextSummary {
    let out = &outcome.output;
    let mut lines = Vec::new();

    lines.push(format!("System: {}", out.system_name));
    lines.push(format!("Directory: {}", out.directory.display()));
    match outcome.elapsed {
        Some(elapsed) => lines.push(format!(
            "Run: executed in {}",
            humantime::format_duration(round_millis(elapsed))
        )),
        None => lines.push("Run: skipped, existing log reused".to_string()),
    }
    lines.push(format!(
        "Log: {} ({} lines)",
        out.log_path.display(),
        out.log_text.lines().count()
    ));
    if out.forward_files.is_empty() {
        lines.push("Forward files: -".to_string());
    } else {
        lines.push(format!("Forward files ({}):", out.forward_files.len()));
        for f in &out.forward_files {
            lines.push(format!("  {:<12} {}", f.body, f.path.display()));
        }
    }
    lines.push(format!("Units: {}", if out.units { "on" } else { "off" }));
    lines.push(format!("Finished: {}", outcome.finished_utc));

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;
    use vplanet_run::model::ForwardFile;

    fn outcome(elapsed: Option<Duration>, forward: Vec<ForwardFile>) -> RunOutcome<Output> {
        RunOutcome {
            output: Output {
                directory: PathBuf::from("/runs/earth"),
                system_name: "earth".into(),
                units: true,
                log_path: PathBuf::from("/runs/earth/earth.log"),
                log_text: "a\nb\n".into(),
                forward_files: forward,
            },
            executed: elapsed.is_some(),
            elapsed,
            finished_utc: "2024-05-01T12:00:00Z".into(),
        }
    }

    #[test]
    fn executed_run_reports_elapsed() {
        let s = build_text_summary(&outcome(Some(Duration::from_micros(2_250_400)), vec![]));
        assert_eq!(s.lines[0], "System: earth");
        assert_eq!(s.lines[2], "Run: executed in 2s 250ms");
        assert_eq!(s.lines[3], "Log: /runs/earth/earth.log (2 lines)");
        assert_eq!(s.lines[4], "Forward files: -");
    }

    #[test]
    fn skipped_run_lists_bodies() {
        let s = build_text_summary(&outcome(
            None,
            vec![ForwardFile {
                body: "sun".into(),
                path: PathBuf::from("/runs/earth/earth.sun.forward"),
            }],
        ));
        assert_eq!(s.lines[2], "Run: skipped, existing log reused");
        assert_eq!(s.lines[4], "Forward files (1):");
        assert!(s.lines[5].trim_start().starts_with("sun"));
    }
}
