pub mod stage1_normalize;
pub mod stage2_scores;
pub mod stage3_subtype;
pub mod stage4_locus;
pub mod stage5_epigenetic;
pub mod stage6_mrs;
pub mod stage7_assemble;

use thiserror::Error;
use tracing::info;

use crate::input::{Dataset, InputError};
use crate::model::labels::{Epigenetic, Locus14q32, Mrs};
use crate::model::thresholds::{AssayType, ThresholdProfile};
use crate::panels::{PanelIndex, defs::SUBTYPE_PANEL_TOTAL, resolve_panels};
use stage1_normalize::{NormalizedTable, run_stage1};
use stage3_subtype::SubtypeCall;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no non-tumor (NT_) columns present; normalization baseline undefined")]
    NoBaselineColumns,
    #[error("no tumor (T_) columns present")]
    NoTumorColumns,
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub assay: AssayType,
    pub thresholds: ThresholdProfile,
}

/// All calls for one tumor sample, before serialization.
#[derive(Debug, Clone)]
pub struct SampleCall {
    pub sample: String,
    pub score: u32,
    pub subtype: SubtypeCall,
    pub locus_14q32: Locus14q32,
    pub epigenetic: Option<Epigenetic>,
    pub mrs: Option<Mrs>,
}

/// Run the whole classification pipeline over one dataset.
///
/// Pure with respect to the inputs: no caches, no shared state, so concurrent
/// invocations over independent datasets cannot interfere.
pub fn run_pipeline(
    dataset: &Dataset,
    options: &PipelineOptions,
) -> Result<Vec<SampleCall>, PipelineError> {
    let panels = resolve_panels(dataset)?;
    let normalized = run_stage1(dataset, panels.methyl_array)?;
    let cutoffs = options.thresholds.score_cutoffs(options.assay);
    let scores = stage2_scores::run_stage2(&normalized, &panels, cutoffs);

    let mut calls = Vec::with_capacity(normalized.n_tumor_samples());
    for tumor in 0..normalized.n_tumor_samples() {
        calls.push(classify_sample(
            dataset,
            &normalized,
            &panels,
            &options.thresholds,
            scores[tumor],
            tumor,
        ));
    }

    info!("classified {} tumor samples", calls.len());
    Ok(calls)
}

fn classify_sample(
    dataset: &Dataset,
    normalized: &NormalizedTable,
    panels: &PanelIndex,
    thresholds: &ThresholdProfile,
    score: u32,
    tumor: usize,
) -> SampleCall {
    let vim_ratio = normalized.ratio(panels.vim, tumor);
    let subtype = stage3_subtype::classify_subtype(score, SUBTYPE_PANEL_TOTAL, vim_ratio, thresholds);

    let locus_ratios: Vec<Option<f64>> = panels
        .locus_14q32
        .iter()
        .map(|&row| normalized.ratio(row, tumor))
        .collect();
    let locus = stage4_locus::classify_locus(&locus_ratios, thresholds);

    let cpg = stage5_epigenetic::classify_cpg(normalized.ratio(panels.methyl_array, tumor), thresholds);
    // The PUMA rule reads the raw tumor value, not the ratio.
    let raw_puma = dataset.value(panels.puma, normalized.tumor_cols[tumor]);
    let puma = stage5_epigenetic::classify_puma(raw_puma, normalized.mean_nt[panels.puma], thresholds);
    let epigenetic = stage5_epigenetic::combine_epigenetic(cpg, puma);

    let mrs = stage6_mrs::classify_mrs(locus, epigenetic, subtype.label);

    SampleCall {
        sample: normalized.tumor_samples[tumor].clone(),
        score,
        subtype,
        locus_14q32: locus,
        epigenetic,
        mrs,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
