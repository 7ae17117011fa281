pub mod json;
pub mod table;
pub mod text;

use serde::Serialize;
use thiserror::Error;

use crate::pipeline::SampleCall;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
}

/// Run-level summary written next to the result table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub protocol: String,
    pub assay: String,

    pub n_features: usize,
    pub n_tumor_samples: usize,
    pub n_non_tumor_samples: usize,

    pub subtype: Vec<LabelCount>,
    pub locus_14q32: Vec<LabelCount>,
    pub epigenetic: Vec<LabelCount>,
    pub mrs: Vec<LabelCount>,

    pub epigenetic_missing_fraction: f64,
    pub mrs_missing_fraction: f64,
}

pub struct SummaryContext<'a> {
    pub protocol: &'a str,
    pub assay: &'a str,
    pub n_features: usize,
    pub n_non_tumor_samples: usize,
}

pub fn build_summary(calls: &[SampleCall], ctx: &SummaryContext<'_>) -> SummaryData {
    let n = calls.len();

    let subtype = count_labels(calls, |c| Some(c.subtype.label.as_str()));
    let locus_14q32 = count_labels(calls, |c| Some(c.locus_14q32.as_str()));
    let epigenetic = count_labels(calls, |c| c.epigenetic.map(|e| e.as_str()));
    let mrs = count_labels(calls, |c| c.mrs.map(|m| m.as_str()));

    SummaryData {
        tool_name: "hb-mrs".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        protocol: ctx.protocol.to_string(),
        assay: ctx.assay.to_string(),
        n_features: ctx.n_features,
        n_tumor_samples: n,
        n_non_tumor_samples: ctx.n_non_tumor_samples,
        subtype,
        locus_14q32,
        epigenetic,
        mrs,
        epigenetic_missing_fraction: missing_fraction(calls, |c| c.epigenetic.is_none()),
        mrs_missing_fraction: missing_fraction(calls, |c| c.mrs.is_none()),
    }
}

fn count_labels(
    calls: &[SampleCall],
    label_of: impl Fn(&SampleCall) -> Option<&'static str>,
) -> Vec<LabelCount> {
    let mut order: Vec<&'static str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for call in calls {
        let Some(label) = label_of(call) else { continue };
        match order.iter().position(|&l| l == label) {
            Some(idx) => counts[idx] += 1,
            None => {
                order.push(label);
                counts.push(1);
            }
        }
    }

    let total = calls.len().max(1);
    order
        .into_iter()
        .zip(counts)
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
            fraction: count as f64 / total as f64,
        })
        .collect()
}

fn missing_fraction(calls: &[SampleCall], is_missing: impl Fn(&SampleCall) -> bool) -> f64 {
    if calls.is_empty() {
        return 0.0;
    }
    let missing = calls.iter().filter(|c| is_missing(c)).count();
    missing as f64 / calls.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
