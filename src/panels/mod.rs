pub mod defs;

use crate::input::{Dataset, InputError};
use defs::{C1_PANEL, C2_PANEL, LOCUS_14Q32_PANEL, ROW_METHYL_ARRAY, ROW_PUMA, ROW_VIM};

/// Fixed-name rows the pipeline reads outside the gene panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRow {
    Vim,
    MethylArray,
    Puma,
}

impl RequiredRow {
    pub fn row_name(self) -> &'static str {
        match self {
            RequiredRow::Vim => ROW_VIM,
            RequiredRow::MethylArray => ROW_METHYL_ARRAY,
            RequiredRow::Puma => ROW_PUMA,
        }
    }
}

const REQUIRED_ROWS: &[RequiredRow] = &[
    RequiredRow::Vim,
    RequiredRow::MethylArray,
    RequiredRow::Puma,
];

/// Panel genes and fixed rows resolved to row indices of one dataset.
///
/// Resolution happens once, before any scoring, so a missing panel gene or
/// fixed-name row aborts the run with the offending name instead of failing
/// inside a later lookup.
#[derive(Debug, Clone)]
pub struct PanelIndex {
    pub c1: Vec<usize>,
    pub c2: Vec<usize>,
    pub locus_14q32: Vec<usize>,
    pub vim: usize,
    pub methyl_array: usize,
    pub puma: usize,
}

pub fn resolve_panels(dataset: &Dataset) -> Result<PanelIndex, InputError> {
    let c1 = resolve_genes(dataset, C1_PANEL)?;
    let c2 = resolve_genes(dataset, C2_PANEL)?;
    let locus_14q32 = resolve_genes(dataset, LOCUS_14Q32_PANEL)?;

    let mut fixed = [0usize; 3];
    for (slot, row) in fixed.iter_mut().zip(REQUIRED_ROWS) {
        *slot = dataset
            .row(row.row_name())
            .ok_or_else(|| InputError::MissingRow(row.row_name().to_string()))?;
    }

    Ok(PanelIndex {
        c1,
        c2,
        locus_14q32,
        vim: fixed[0],
        methyl_array: fixed[1],
        puma: fixed[2],
    })
}

fn resolve_genes(dataset: &Dataset, genes: &[&str]) -> Result<Vec<usize>, InputError> {
    let mut out = Vec::with_capacity(genes.len());
    for gene in genes {
        let idx = dataset
            .row(gene)
            .ok_or_else(|| InputError::MissingRow((*gene).to_string()))?;
        out.push(idx);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/panels/tests.rs"]
mod tests;
