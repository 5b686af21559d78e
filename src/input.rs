//! Loads the findings payload from a file or stdin.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{LintfmtError, Result};
use crate::findings::Finding;

/// Read findings from `path`, or from stdin when no path is given.
pub fn load(path: Option<&Path>) -> Result<Vec<Finding>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path).map_err(|e| LintfmtError::Read {
            path: path.display().to_string(),
            source: e,
        })?,
        None => io::read_to_string(io::stdin()).map_err(LintfmtError::Stdin)?,
    };

    parse(&raw)
}

/// Parse a JSON array of findings. Order is preserved.
pub fn parse(raw: &str) -> Result<Vec<Finding>> {
    let findings: Vec<Finding> = serde_json::from_str(raw)?;
    debug!(count = findings.len(), "Parsed findings input");
    Ok(findings)
}
