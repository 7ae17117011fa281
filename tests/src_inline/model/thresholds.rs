use super::*;

#[test]
fn test_protocol_v3_literals() {
    let t = ThresholdProfile::protocol_v3();
    assert_eq!(t.version, ProtocolVersion::V3);
    assert_eq!(t.rnaseq_cutoffs, ScoreCutoffs { down: 0.25, up: 4.0 });
    assert_eq!(t.nanostring_cutoffs, ScoreCutoffs { down: 0.5, up: 2.0 });
    assert_eq!(t.intermediate_low, 40.0);
    assert_eq!(t.intermediate_high, 60.0);
    assert_eq!(t.vim_cutoff, 6.5);
    assert_eq!(t.locus_ratio_min, 10.0);
    assert_eq!(t.locus_genes_min, 1);
    assert_eq!(t.cpg_percent_cutoff, 6.6);
    assert_eq!(t.puma_rule, PumaRule::BaselineOffset(7.17));
}

#[test]
fn test_protocol_v2_literals() {
    let t = ThresholdProfile::protocol_v2();
    assert_eq!(t.version, ProtocolVersion::V2);
    // v2 used one cutoff pair regardless of assay.
    assert_eq!(t.rnaseq_cutoffs, ScoreCutoffs { down: 0.5, up: 2.0 });
    assert_eq!(t.nanostring_cutoffs, ScoreCutoffs { down: 0.5, up: 2.0 });
    assert_eq!(t.puma_rule, PumaRule::FixedCutoff(9.67));
}

#[test]
fn test_score_cutoffs_follow_assay() {
    let t = ThresholdProfile::protocol_v3();
    assert_eq!(
        t.score_cutoffs(AssayType::RnaSeq),
        ScoreCutoffs { down: 0.25, up: 4.0 }
    );
    assert_eq!(
        t.score_cutoffs(AssayType::Nanostring),
        ScoreCutoffs { down: 0.5, up: 2.0 }
    );
}

#[test]
fn test_for_version_dispatch() {
    assert_eq!(
        ThresholdProfile::for_version(ProtocolVersion::V2).version,
        ProtocolVersion::V2
    );
    assert_eq!(
        ThresholdProfile::for_version(ProtocolVersion::V3).version,
        ProtocolVersion::V3
    );
}
