use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::quiz::dataset::Dataset;

/// Validate a dataset file and print every violation instead of stopping at
/// the first. Returns `true` when the file is clean.
pub fn check_dataset(path: &Path, out: &mut impl Write) -> Result<bool> {
    let shown = path.display();
    let json = fs::read_to_string(path).with_context(|| format!("failed to read {shown}"))?;
    let dataset = Dataset::parse_json(&json).with_context(|| format!("failed to parse {shown}"))?;

    let report = dataset.validate();
    info!("Checked {shown}: {} violation(s)", report.len());
    if report.is_empty() {
        writeln!(
            out,
            "{shown}: ok ({} questions, {} results)",
            dataset.questions.len(),
            dataset.results.len()
        )?;
        return Ok(true);
    }

    writeln!(out, "{shown}: {} violation(s)", report.len())?;
    writeln!(out, "{report}")?;
    Ok(false)
}
