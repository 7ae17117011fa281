use std::path::Path;

use calamine::{DataType, Reader, open_workbook_auto};
use tracing::info;

use crate::input::{Dataset, InputError};

/// Read the first worksheet of an Excel workbook into a [`Dataset`].
///
/// The layout matches the upload template: first column holds feature names,
/// the header row holds sample names. Blank or non-numeric cells become
/// missing values.
pub fn load_workbook(path: &Path) -> Result<Dataset, InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::InvalidInput("workbook has no worksheets".to_string()))?
        .map_err(InputError::Spreadsheet)?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| InputError::InvalidInput("worksheet is empty".to_string()))?;
    let samples: Vec<String> = header.iter().skip(1).map(cell_to_string).collect();
    if samples.is_empty() {
        return Err(InputError::InvalidInput(
            "worksheet header has no sample columns".to_string(),
        ));
    }

    let mut features = Vec::new();
    let mut values = Vec::new();
    for row in rows {
        let feature = row.first().map(cell_to_string).unwrap_or_default();
        if feature.is_empty() {
            continue;
        }
        let mut cells = Vec::with_capacity(samples.len());
        for col in 0..samples.len() {
            cells.push(row.get(col + 1).and_then(cell_to_number));
        }
        features.push(feature);
        values.push(cells);
    }

    info!(
        "loaded {} feature rows, {} sample columns from {}",
        features.len(),
        samples.len(),
        path.display()
    );
    Dataset::new(features, samples, values)
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.trim().to_string(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) => f.to_string(),
        _ => String::new(),
    }
}

fn cell_to_number(cell: &DataType) -> Option<f64> {
    match cell {
        DataType::Int(i) => Some(*i as f64),
        DataType::Float(f) => Some(*f),
        DataType::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
