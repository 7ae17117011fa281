use super::*;

use crate::model::labels::{Epigenetic, Locus14q32, Mrs, Subtype};
use crate::pipeline::stage3_subtype::SubtypeCall;

fn call(
    sample: &str,
    subtype: Subtype,
    epigenetic: Option<Epigenetic>,
    mrs: Option<Mrs>,
) -> SampleCall {
    SampleCall {
        sample: sample.to_string(),
        score: 8,
        subtype: SubtypeCall {
            label: subtype,
            percentage: 50.0,
        },
        locus_14q32: Locus14q32::Moderate,
        epigenetic,
        mrs,
    }
}

fn ctx() -> SummaryContext<'static> {
    SummaryContext {
        protocol: "v3",
        assay: "Nanostring",
        n_features: 21,
        n_non_tumor_samples: 5,
    }
}

#[test]
fn test_summary_counts_and_fractions() {
    let calls = vec![
        call("T_A", Subtype::C2Pure, Some(Epigenetic::EpiCb), Some(Mrs::Mrs2)),
        call("T_B", Subtype::C2Pure, Some(Epigenetic::EpiCb), Some(Mrs::Mrs2)),
        call("T_C", Subtype::C1Subtype, None, None),
        call("T_D", Subtype::Intermediate, Some(Epigenetic::EpiCa), Some(Mrs::Mrs1)),
    ];
    let summary = build_summary(&calls, &ctx());

    assert_eq!(summary.n_tumor_samples, 4);
    assert_eq!(summary.n_non_tumor_samples, 5);

    let c2 = summary
        .subtype
        .iter()
        .find(|c| c.label == "C2-Pure")
        .unwrap();
    assert_eq!(c2.count, 2);
    assert_eq!(c2.fraction, 0.5);

    let epicb = summary
        .epigenetic
        .iter()
        .find(|c| c.label == "Epi-CB")
        .unwrap();
    assert_eq!(epicb.count, 2);

    assert_eq!(summary.epigenetic_missing_fraction, 0.25);
    assert_eq!(summary.mrs_missing_fraction, 0.25);
}

#[test]
fn test_missing_calls_are_not_counted_as_labels() {
    let calls = vec![call("T_A", Subtype::C1Subtype, None, None)];
    let summary = build_summary(&calls, &ctx());
    assert!(summary.epigenetic.is_empty());
    assert!(summary.mrs.is_empty());
    assert_eq!(summary.epigenetic_missing_fraction, 1.0);
}

#[test]
fn test_empty_run_has_zero_fractions() {
    let summary = build_summary(&[], &ctx());
    assert_eq!(summary.n_tumor_samples, 0);
    assert_eq!(summary.epigenetic_missing_fraction, 0.0);
    assert_eq!(summary.mrs_missing_fraction, 0.0);
}
