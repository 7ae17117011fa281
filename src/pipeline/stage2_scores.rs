use crate::model::thresholds::ScoreCutoffs;
use crate::panels::PanelIndex;
use crate::pipeline::stage1_normalize::NormalizedTable;

/// Count, per tumor sample, the C1-panel genes at or below the down cutoff
/// plus the C2-panel genes at or above the up cutoff. Both comparisons are
/// boundary inclusive. Missing ratios never count toward the score.
///
/// Panel rows were resolved up front, so every index here is valid.
pub fn run_stage2(
    normalized: &NormalizedTable,
    panels: &PanelIndex,
    cutoffs: ScoreCutoffs,
) -> Vec<u32> {
    let mut scores = Vec::with_capacity(normalized.n_tumor_samples());
    for tumor in 0..normalized.n_tumor_samples() {
        let down = count_matching(normalized, &panels.c1, tumor, |v| v <= cutoffs.down);
        let up = count_matching(normalized, &panels.c2, tumor, |v| v >= cutoffs.up);
        scores.push(down + up);
    }
    scores
}

fn count_matching(
    normalized: &NormalizedTable,
    rows: &[usize],
    tumor: usize,
    pred: impl Fn(f64) -> bool,
) -> u32 {
    let mut count = 0u32;
    for &row in rows {
        if let Some(v) = normalized.ratio(row, tumor) {
            if pred(v) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
