use std::fs;
use std::path::Path;

use crate::report::{ReportError, SummaryData};

pub fn write_summary_json(summary: &SummaryData, path: &Path) -> Result<(), ReportError> {
    fs::write(path, render_summary_json(summary)?)?;
    Ok(())
}

pub fn render_summary_json(summary: &SummaryData) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}
