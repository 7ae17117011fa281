use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::input::{Dataset, InputError};

/// Read a delimited text table (same shape as the Excel template) into a
/// [`Dataset`].
pub fn load_table(path: &Path, delimiter: u8) -> Result<Dataset, InputError> {
    let file = File::open(path)?;
    let dataset = parse_table(file, delimiter)?;
    info!(
        "loaded {} feature rows, {} sample columns from {}",
        dataset.n_features(),
        dataset.samples().len(),
        path.display()
    );
    Ok(dataset)
}

pub fn parse_table<R: Read>(reader: R, delimiter: u8) -> Result<Dataset, InputError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(false)
        .from_reader(reader);

    let header = rdr.headers()?.clone();
    let samples: Vec<String> = header.iter().skip(1).map(|s| s.trim().to_string()).collect();
    if samples.is_empty() {
        return Err(InputError::InvalidInput(
            "table header has no sample columns".to_string(),
        ));
    }

    let mut features = Vec::new();
    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let feature = record.get(0).unwrap_or("").trim().to_string();
        if feature.is_empty() {
            continue;
        }
        let mut cells = Vec::with_capacity(samples.len());
        for col in 0..samples.len() {
            cells.push(parse_cell(record.get(col + 1).unwrap_or("")));
        }
        features.push(feature);
        values.push(cells);
    }

    Dataset::new(features, samples, values)
}

fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") || trimmed.eq_ignore_ascii_case("nan")
    {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
