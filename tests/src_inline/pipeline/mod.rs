use super::*;

use crate::model::labels::Subtype;
use crate::panels::defs::{
    C1_PANEL, C2_PANEL, ROW_METHYL_ARRAY, ROW_PUMA, ROW_VIM,
};

const N: Option<f64> = None;

fn v(x: f64) -> Option<f64> {
    Some(x)
}

/// 3 tumor + 5 non-tumor fixture. Every NT baseline is constant per row, so
/// each expected ratio is readable straight from the tumor cell.
///
///   T_A: score 16 (100%), C2-Pure, Strong, Epi-CB via PUMA  -> MRS-3b
///   T_B: score 0 (0%), C1-subtype, Moderate, Non-Epi-CB     -> MRS-1
///   T_C: score 8 (50%), Intermediate, Strong, no epi values -> missing
fn fixture() -> Dataset {
    let mut features = Vec::new();
    let mut values = Vec::new();

    // columns: T_A, T_B, T_C, NT_01..NT_05
    let mut push = |name: &str, t: [Option<f64>; 3], nt: f64| {
        features.push(name.to_string());
        let mut row = t.to_vec();
        row.extend(vec![v(nt); 5]);
        values.push(row);
    };

    for (i, gene) in C1_PANEL.iter().enumerate() {
        let t_c = if i < 4 { v(0.5) } else { v(1.0) };
        push(gene, [v(0.5), v(1.0), t_c], 1.0);
    }
    for (i, gene) in C2_PANEL.iter().enumerate() {
        let t_c = if i < 4 { v(2.0) } else { v(1.0) };
        push(gene, [v(2.0), v(1.0), t_c], 1.0);
    }
    push("DLK1", [v(12.0), v(2.0), v(1.0)], 1.0);
    push("MEG3", [v(1.0), v(3.0), v(10.0)], 1.0);
    push(ROW_VIM, [v(5.0), v(7.0), v(1.0)], 1.0);
    push(ROW_METHYL_ARRAY, [v(0.19), v(0.19), N], 0.2);
    push(ROW_PUMA, [v(10.0), v(5.0), N], 2.0);

    let samples = ["T_A", "T_B", "T_C", "NT_01", "NT_02", "NT_03", "NT_04", "NT_05"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    Dataset::new(features, samples, values).unwrap()
}

fn options() -> PipelineOptions {
    PipelineOptions {
        assay: AssayType::Nanostring,
        thresholds: ThresholdProfile::protocol_v3(),
    }
}

#[test]
fn test_end_to_end_fixture() {
    let calls = run_pipeline(&fixture(), &options()).unwrap();
    assert_eq!(calls.len(), 3);

    let a = &calls[0];
    assert_eq!(a.sample, "T_A");
    assert_eq!(a.score, 16);
    assert_eq!(a.subtype.percentage, 100.0);
    assert_eq!(a.subtype.label, Subtype::C2Pure);
    assert_eq!(a.locus_14q32, Locus14q32::Strong);
    // PUMA 10.0 > 7.17 + 2.0; the PUMA call outranks the CpG call.
    assert_eq!(a.epigenetic, Some(Epigenetic::EpiCb));
    assert_eq!(a.mrs, Some(Mrs::Mrs3b));

    let b = &calls[1];
    assert_eq!(b.sample, "T_B");
    assert_eq!(b.score, 0);
    assert_eq!(b.subtype.percentage, 0.0);
    assert_eq!(b.subtype.label, Subtype::C1Subtype);
    assert_eq!(b.locus_14q32, Locus14q32::Moderate);
    assert_eq!(b.epigenetic, Some(Epigenetic::NonEpiCb));
    assert_eq!(b.mrs, Some(Mrs::Mrs1));

    let c = &calls[2];
    assert_eq!(c.sample, "T_C");
    assert_eq!(c.score, 8);
    assert_eq!(c.subtype.percentage, 50.0);
    assert_eq!(c.subtype.label, Subtype::Intermediate);
    assert_eq!(c.locus_14q32, Locus14q32::Strong);
    // No CpG or PUMA measurement: the sample still appears, with only the
    // epigenetic and MRS calls missing.
    assert_eq!(c.epigenetic, None);
    assert_eq!(c.mrs, None);
}

#[test]
fn test_result_rows_match_fixture() {
    let calls = run_pipeline(&fixture(), &options()).unwrap();
    let rows = stage7_assemble::run_stage7(&calls);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].mrs.as_deref(), Some("MRS-3b"));
    assert_eq!(rows[1].mrs.as_deref(), Some("MRS-1"));
    assert_eq!(rows[2].epigenetic, None);
    assert_eq!(rows[2].mrs, None);
}

#[test]
fn test_missing_panel_gene_aborts_the_run() {
    let ds = fixture();
    let features: Vec<String> = ds
        .features()
        .iter()
        .filter(|f| f.as_str() != "AFP")
        .cloned()
        .collect();
    let values: Vec<Vec<Option<f64>>> = ds
        .features()
        .iter()
        .enumerate()
        .filter(|(_, f)| f.as_str() != "AFP")
        .map(|(row, _)| {
            (0..ds.samples().len())
                .map(|col| ds.value(row, col))
                .collect()
        })
        .collect();
    let broken = Dataset::new(features, ds.samples().to_vec(), values).unwrap();

    let err = run_pipeline(&broken, &options()).unwrap_err();
    match err {
        PipelineError::Input(InputError::MissingRow(name)) => assert_eq!(name, "AFP"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_protocol_v2_fixed_puma_cutoff_changes_the_call() {
    // T_B PUMA raw 5.0: below both cutoffs. T_A raw 10.0 clears the fixed
    // 9.67 cutoff too, so only the rule, not the call, differs for T_A.
    let opts = PipelineOptions {
        assay: AssayType::Nanostring,
        thresholds: ThresholdProfile::protocol_v2(),
    };
    let calls = run_pipeline(&fixture(), &opts).unwrap();
    assert_eq!(calls[0].epigenetic, Some(Epigenetic::EpiCb));
    assert_eq!(calls[1].epigenetic, Some(Epigenetic::NonEpiCb));
}
