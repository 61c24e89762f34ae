//! Decides whether a new simulator run is needed.
//!
//! The result log `<dir>/<system>.log` is the only idempotency marker. Nothing
//! is locked: two runs racing on the same directory can both decide to invoke.

use std::path::{Path, PathBuf};

use log::debug;

/// Outcome of the run gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunDecision {
    /// Spawn the simulator.
    Invoke,
    /// Reuse the existing log.
    Skip,
}

/// Path of the result log the simulator writes for `system_name`.
pub fn artifact_path(dir: &Path, system_name: &str) -> PathBuf {
    dir.join(format!("{system_name}.log"))
}

/// Invoke when clobbering, otherwise only when the log is missing.
pub fn decide(dir: &Path, system_name: &str, clobber: bool) -> RunDecision {
    let log = artifact_path(dir, system_name);
    let decision = if clobber || !log.exists() {
        RunDecision::Invoke
    } else {
        RunDecision::Skip
    };
    debug!(
        "gate: log={} clobber={} -> {:?}",
        log.display(),
        clobber,
        decision
    );
    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn artifact_sits_next_to_input() {
        assert_eq!(
            artifact_path(Path::new("/runs/a"), "earth"),
            PathBuf::from("/runs/a/earth.log")
        );
    }

    #[test]
    fn missing_log_invokes() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(decide(dir.path(), "earth", false), RunDecision::Invoke);
    }

    #[test]
    fn existing_log_skips() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("earth.log"), "").unwrap();
        assert_eq!(decide(dir.path(), "earth", false), RunDecision::Skip);
    }

    #[test]
    fn clobber_always_invokes() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(decide(dir.path(), "earth", true), RunDecision::Invoke);
        fs::write(dir.path().join("earth.log"), "").unwrap();
        assert_eq!(decide(dir.path(), "earth", true), RunDecision::Invoke);
    }

    #[test]
    fn other_systems_log_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mars.log"), "").unwrap();
        assert_eq!(decide(dir.path(), "earth", false), RunDecision::Invoke);
    }
}
