//! Extracts the system name from a simulator input file.
//!
//! Only one directive is recognised; every other line is opaque:
//!
//! ```text
//! line       := ws* "sSystemName" ws+ value terminator rest
//! ws         := ' ' | '\t'
//! value      := 1* (any char except ws, '#', '\r', '\n')
//! terminator := ws | '#' | '\r' | '\n' | end-of-line
//! ```
//!
//! The first matching line wins. A keyword with no value does not match.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

const DIRECTIVE: &str = "sSystemName";

/// Scan `path` for the first `sSystemName` directive.
pub fn scan_system_name(path: &Path) -> Result<Option<String>> {
    let config_err = |source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(config_err)?;
    let name = parse_system_name(BufReader::new(file)).map_err(config_err)?;
    debug!("system name in {}: {:?}", path.display(), name);
    Ok(name)
}

/// Scan already-open input. Stops reading at the first match.
pub fn parse_system_name<R: BufRead>(reader: R) -> std::io::Result<Option<String>> {
    for line in reader.lines() {
        if let Some(name) = match_directive(&line?) {
            return Ok(Some(name.to_string()));
        }
    }
    Ok(None)
}

fn is_ws(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_value_end(c: char) -> bool {
    is_ws(c) || matches!(c, '#' | '\r' | '\n')
}

/// Match a single line against the directive grammar.
fn match_directive(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(is_ws).strip_prefix(DIRECTIVE)?;
    let value = rest.strip_prefix(is_ws)?.trim_start_matches(is_ws);
    let end = value.find(is_value_end).unwrap_or(value.len());
    let value = &value[..end];
    (!value.is_empty()).then_some(value)
}
