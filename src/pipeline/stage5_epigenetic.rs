use crate::model::labels::Epigenetic;
use crate::model::thresholds::{PumaRule, ThresholdProfile};

/// CpG-array arm: the normalized methylation value is already inverted by the
/// normalizer, so it measures methylation loss. Expressed as a percentage it
/// splits Epi-CB from Epi-CA.
pub fn classify_cpg(
    methyl_ratio: Option<f64>,
    thresholds: &ThresholdProfile,
) -> Option<Epigenetic> {
    let m = methyl_ratio?;
    if m * 100.0 > thresholds.cpg_percent_cutoff {
        Some(Epigenetic::EpiCb)
    } else {
        Some(Epigenetic::EpiCa)
    }
}

/// PUMA arm: compares the raw tumor value either against a fixed cutoff
/// (protocol v2) or against an offset above the mean non-tumor value
/// (protocol v3). A missing tumor value is a missing call; under the
/// baseline-relative rule a missing baseline is one too.
pub fn classify_puma(
    raw_tumor: Option<f64>,
    mean_nt: Option<f64>,
    thresholds: &ThresholdProfile,
) -> Option<Epigenetic> {
    let raw = raw_tumor?;
    let cutoff = match thresholds.puma_rule {
        PumaRule::FixedCutoff(c) => c,
        PumaRule::BaselineOffset(offset) => offset + mean_nt?,
    };
    if raw > cutoff {
        Some(Epigenetic::EpiCb)
    } else {
        Some(Epigenetic::NonEpiCb)
    }
}

/// Source preference: the PUMA call wins; the CpG call is only a fallback
/// when no PUMA call exists. Both missing leaves the sample uncalled.
pub fn combine_epigenetic(
    cpg: Option<Epigenetic>,
    puma: Option<Epigenetic>,
) -> Option<Epigenetic> {
    puma.or(cpg)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_epigenetic.rs"]
mod tests;
