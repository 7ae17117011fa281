use super::*;

use crate::model::thresholds::ThresholdProfile;

fn profile() -> ThresholdProfile {
    ThresholdProfile::protocol_v3()
}

#[test]
fn test_one_gene_at_cutoff_is_strong() {
    // Boundary inclusive: exactly 10.0 counts.
    let label = classify_locus(&[Some(10.0), Some(2.0)], &profile());
    assert_eq!(label, Locus14q32::Strong);
}

#[test]
fn test_both_genes_below_cutoff_is_moderate() {
    let label = classify_locus(&[Some(9.99), Some(9.99)], &profile());
    assert_eq!(label, Locus14q32::Moderate);
}

#[test]
fn test_missing_ratios_never_count() {
    assert_eq!(
        classify_locus(&[None, None], &profile()),
        Locus14q32::Moderate
    );
    assert_eq!(
        classify_locus(&[None, Some(11.0)], &profile()),
        Locus14q32::Strong
    );
}
