use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::pipeline::stage7_assemble::ResultRow;
use crate::report::ReportError;

/// Write the classification result table as CSV. A missing call becomes an
/// empty cell, which round-trips back through the table reader as missing.
pub fn write_result_table(rows: &[ResultRow], path: &Path) -> Result<(), ReportError> {
    let file = File::create(path)?;
    render_result_table(rows, BufWriter::new(file))?;
    info!("wrote {} result rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn render_result_table<W: Write>(rows: &[ResultRow], out: W) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new().from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
