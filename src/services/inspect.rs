use crate::domain::models::CheckReport;
use crate::services::template::{FN_PREFIX, PREAMBLE};
use std::path::Path;

/// Counts append runs (preambles) and function blocks in an existing
/// fixture, and verifies that block indices restart at 0 and increment
/// within each run.
pub fn check_fixture(path: &Path) -> anyhow::Result<CheckReport> {
    let raw = std::fs::read_to_string(path)?;
    let preamble_first = PREAMBLE.lines().next().unwrap_or("");

    let mut runs = 0u64;
    let mut blocks = 0u64;
    let mut sequential = true;
    let mut expected = 0u64;

    for line in raw.lines() {
        if line == preamble_first {
            runs += 1;
            expected = 0;
        } else if let Some(rest) = line.strip_prefix(FN_PREFIX) {
            blocks += 1;
            let index = rest.split('(').next().and_then(|d| d.parse::<u64>().ok());
            if index == Some(expected) {
                expected += 1;
            } else {
                sequential = false;
            }
        }
    }

    Ok(CheckReport {
        path: path.display().to_string(),
        runs,
        blocks,
        sequential,
        bytes: raw.len() as u64,
    })
}
