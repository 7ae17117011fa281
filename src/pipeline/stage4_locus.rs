use crate::model::labels::Locus14q32;
use crate::model::thresholds::ThresholdProfile;

/// Classify the 14q32 locus signature from the normalized ratios of the
/// two-gene panel (DLK1, MEG3). Strong when at least `locus_genes_min` genes
/// reach the ratio cutoff; the threshold applies to the tumor/baseline ratio,
/// not the raw value. Missing ratios never count.
pub fn classify_locus(ratios: &[Option<f64>], thresholds: &ThresholdProfile) -> Locus14q32 {
    let over = ratios
        .iter()
        .filter(|r| r.is_some_and(|v| v >= thresholds.locus_ratio_min))
        .count() as u32;
    if over >= thresholds.locus_genes_min {
        Locus14q32::Strong
    } else {
        Locus14q32::Moderate
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_locus.rs"]
mod tests;
