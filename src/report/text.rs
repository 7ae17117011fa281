use crate::report::{LabelCount, SummaryData};

pub fn render_summary_text(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Hepatoblastoma Molecular Risk Stratification Report\n");
    out.push_str("===================================================\n\n");

    out.push_str("1. Run\n");
    out.push_str(&format!(
        "Tool: {} {}\n",
        summary.tool_name, summary.tool_version
    ));
    out.push_str(&format!("Protocol: {}\n", summary.protocol));
    out.push_str(&format!("Assay: {}\n", summary.assay));
    out.push_str(&format!(
        "Dataset: {} feature rows, {} tumor samples, {} non-tumor baselines\n\n",
        summary.n_features, summary.n_tumor_samples, summary.n_non_tumor_samples
    ));

    out.push_str("2. C1/C2 subtype\n");
    push_counts(&mut out, &summary.subtype);

    out.push_str("\n3. 14q32 signature\n");
    push_counts(&mut out, &summary.locus_14q32);

    out.push_str("\n4. Epigenetic status\n");
    push_counts(&mut out, &summary.epigenetic);
    out.push_str(&format!(
        "Missing: {}\n",
        format_fraction(summary.epigenetic_missing_fraction)
    ));

    out.push_str("\n5. MRS class\n");
    push_counts(&mut out, &summary.mrs);
    out.push_str(&format!(
        "Missing: {}\n",
        format_fraction(summary.mrs_missing_fraction)
    ));

    if summary.epigenetic_missing_fraction > 0.0 {
        out.push_str(
            "\nNote: samples without a CpG or PUMA measurement keep their expression-based \
             calls; only the epigenetic and MRS columns stay empty for them.\n",
        );
    }

    out
}

fn push_counts(out: &mut String, counts: &[LabelCount]) {
    if counts.is_empty() {
        out.push_str("(no calls)\n");
        return;
    }
    for c in counts {
        out.push_str(&format!(
            "{}: {} ({})\n",
            c.label,
            c.count,
            format_fraction(c.fraction)
        ));
    }
}

fn format_fraction(v: f64) -> String {
    format!("{:.1}%", v * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
