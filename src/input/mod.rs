use std::collections::HashMap;
use std::path::Path;

pub mod table;
pub mod xlsx;

use thiserror::Error;

/// Column-name prefix of tumor samples.
pub const TUMOR_PREFIX: &str = "T_";
/// Column-name prefix of non-tumor (baseline) samples.
pub const NON_TUMOR_PREFIX: &str = "NT_";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing required row: {0}")]
    MissingRow(String),
}

/// One uploaded dataset: feature rows by sample columns, in file order.
///
/// Cells hold `Option<f64>`; a blank or non-numeric cell is `None` and stays
/// `None` through every downstream stage. Nothing here is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<String>,
    samples: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
    row_index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new(
        features: Vec<String>,
        samples: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    ) -> Result<Self, InputError> {
        if values.len() != features.len() {
            return Err(InputError::InvalidInput(format!(
                "row count mismatch: {} feature names, {} value rows",
                features.len(),
                values.len()
            )));
        }
        for (row, feature) in values.iter().zip(&features) {
            if row.len() != samples.len() {
                return Err(InputError::InvalidInput(format!(
                    "row {feature} has {} cells, expected {}",
                    row.len(),
                    samples.len()
                )));
            }
        }

        let mut row_index = HashMap::with_capacity(features.len());
        for (idx, feature) in features.iter().enumerate() {
            if row_index.contains_key(feature) {
                tracing::warn!("duplicate feature row {feature}; keeping the first occurrence");
                continue;
            }
            row_index.insert(feature.clone(), idx);
        }

        Ok(Self {
            features,
            samples,
            values,
            row_index,
        })
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    pub fn row(&self, name: &str) -> Option<usize> {
        self.row_index.get(name).copied()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.values[row][col]
    }

    /// Column indices of tumor samples, in file order.
    pub fn tumor_columns(&self) -> Vec<usize> {
        self.columns_with_prefix(TUMOR_PREFIX)
    }

    /// Column indices of non-tumor baseline samples, in file order.
    pub fn non_tumor_columns(&self) -> Vec<usize> {
        self.columns_with_prefix(NON_TUMOR_PREFIX)
    }

    fn columns_with_prefix(&self, prefix: &str) -> Vec<usize> {
        self.samples
            .iter()
            .enumerate()
            .filter(|(_, name)| name.starts_with(prefix))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Load a dataset, dispatching on the file extension.
pub fn load_dataset(path: &Path) -> Result<Dataset, InputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("xlsx") | Some("xls") | Some("ods") => xlsx::load_workbook(path),
        Some("csv") => table::load_table(path, b','),
        Some("tsv") | Some("txt") => table::load_table(path, b'\t'),
        _ => Err(InputError::InvalidInput(format!(
            "unsupported input format: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
