//! Default result loader: finds what a run left on disk.
//!
//! The log and forward file contents are not parsed; that belongs to a dedicated output reader.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::gate::artifact_path;
use crate::model::{ForwardFile, Output};
use crate::orchestrator::ResultLoader;

const FORWARD_EXT: &str = "forward";

/// Reads `<system>.log` and lists `<system>.<body>.forward` next to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDirLoader;

impl ResultLoader for LogDirLoader {
    type Output = Output;

    fn load(&self, dir: &Path, system_name: &str, units: bool) -> Result<Output> {
        let log_path = artifact_path(dir, system_name);
        let log_text = fs::read_to_string(&log_path).map_err(|source| Error::ResultLoad {
            path: log_path.clone(),
            source,
        })?;
        let forward_files = forward_files(dir, system_name)?;
        Ok(Output {
            directory: dir.to_path_buf(),
            system_name: system_name.to_string(),
            units,
            log_path,
            log_text,
            forward_files,
        })
    }
}

fn forward_files(dir: &Path, system_name: &str) -> Result<Vec<ForwardFile>> {
    let load_err = |source| Error::ResultLoad {
        path: dir.to_path_buf(),
        source,
    };
    let prefix = format!("{system_name}.");
    let suffix = format!(".{FORWARD_EXT}");

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(load_err)? {
        let entry = entry.map_err(load_err)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let body = name
            .strip_prefix(prefix.as_str())
            .and_then(|rest| rest.strip_suffix(suffix.as_str()))
            .filter(|body| !body.is_empty() && !body.contains('.'));
        if let Some(body) = body {
            files.push(ForwardFile {
                body: body.to_string(),
                path: entry.path(),
            });
        }
    }
    files.sort_by(|a, b| a.body.cmp(&b.body));
    Ok(files)
}
