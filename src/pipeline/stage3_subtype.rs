use crate::model::labels::Subtype;
use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubtypeCall {
    pub label: Subtype,
    pub percentage: f64,
}

/// Map a C2 score to the C1/C2 subtype label.
///
/// The 40 and 60 boundaries both belong to Intermediate; changing either
/// inequality silently reclassifies borderline samples. Above 60 the VIM
/// ratio splits C2: strictly above the cutoff is C2B, anything else —
/// including a missing VIM ratio — is C2-Pure.
pub fn classify_subtype(
    score: u32,
    panel_total: u32,
    vim_ratio: Option<f64>,
    thresholds: &ThresholdProfile,
) -> SubtypeCall {
    let percentage = 100.0 * f64::from(score) / f64::from(panel_total);

    let label = if percentage >= thresholds.intermediate_low
        && percentage <= thresholds.intermediate_high
    {
        Subtype::Intermediate
    } else if percentage < thresholds.intermediate_low {
        Subtype::C1Subtype
    } else if vim_ratio.is_some_and(|v| v > thresholds.vim_cutoff) {
        Subtype::C2B
    } else {
        Subtype::C2Pure
    };

    SubtypeCall { label, percentage }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_subtype.rs"]
mod tests;
