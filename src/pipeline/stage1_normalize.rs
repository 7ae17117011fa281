use tracing::{info, warn};

use crate::input::Dataset;
use crate::pipeline::PipelineError;

/// Tumor expression ratios against the mean non-tumor baseline.
///
/// Same feature rows as the input dataset; columns are the tumor samples plus
/// the synthetic `Mean_NT` baseline. A missing raw value, a missing baseline,
/// or a zero baseline leaves the cell missing rather than failing the run.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub features: Vec<String>,
    pub tumor_samples: Vec<String>,
    /// Column indices of the tumor samples in the source dataset.
    pub tumor_cols: Vec<usize>,
    /// `[feature][tumor]` tumor/baseline ratios.
    pub values: Vec<Vec<Option<f64>>>,
    /// Per-feature mean of the present non-tumor values.
    pub mean_nt: Vec<Option<f64>>,
}

impl NormalizedTable {
    pub fn ratio(&self, row: usize, tumor: usize) -> Option<f64> {
        self.values[row][tumor]
    }

    pub fn n_tumor_samples(&self) -> usize {
        self.tumor_samples.len()
    }
}

/// Derive the normalized table. `methyl_row` marks the methylation-array row,
/// whose ratio is inverted (`1 - raw/mean`) because methylation loss is the
/// signal there.
pub fn run_stage1(dataset: &Dataset, methyl_row: usize) -> Result<NormalizedTable, PipelineError> {
    let tumor_cols = dataset.tumor_columns();
    let nt_cols = dataset.non_tumor_columns();

    if nt_cols.is_empty() {
        return Err(PipelineError::NoBaselineColumns);
    }
    if tumor_cols.is_empty() {
        return Err(PipelineError::NoTumorColumns);
    }

    let n_features = dataset.n_features();
    let mut mean_nt = Vec::with_capacity(n_features);
    let mut values = Vec::with_capacity(n_features);
    let mut degenerate_rows = 0usize;

    for row in 0..n_features {
        let baseline = mean_of_present(dataset, row, &nt_cols);
        if baseline.is_none() || baseline == Some(0.0) {
            degenerate_rows += 1;
        }

        let mut ratios = Vec::with_capacity(tumor_cols.len());
        for &col in &tumor_cols {
            let ratio = normalize_cell(dataset.value(row, col), baseline);
            ratios.push(if row == methyl_row {
                ratio.map(|r| 1.0 - r)
            } else {
                ratio
            });
        }
        mean_nt.push(baseline);
        values.push(ratios);
    }

    if degenerate_rows > 0 {
        warn!(
            "{degenerate_rows} feature rows have a zero or missing non-tumor baseline; \
             their ratios stay missing"
        );
    }
    info!(
        "normalized {} tumor samples against {} non-tumor baselines",
        tumor_cols.len(),
        nt_cols.len()
    );

    Ok(NormalizedTable {
        features: dataset.features().to_vec(),
        tumor_samples: tumor_cols
            .iter()
            .map(|&c| dataset.samples()[c].clone())
            .collect(),
        tumor_cols,
        values,
        mean_nt,
    })
}

fn mean_of_present(dataset: &Dataset, row: usize, cols: &[usize]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &col in cols {
        if let Some(v) = dataset.value(row, col) {
            sum += v;
            count += 1;
        }
    }
    if count == 0 { None } else { Some(sum / count as f64) }
}

fn normalize_cell(raw: Option<f64>, baseline: Option<f64>) -> Option<f64> {
    match (raw, baseline) {
        (Some(r), Some(b)) if b != 0.0 => Some(r / b),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
