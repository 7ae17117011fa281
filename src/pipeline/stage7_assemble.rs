use serde::Serialize;

use crate::pipeline::SampleCall;

/// One exported result row. Missing calls serialize as an empty CSV cell or
/// JSON null, never as 0 or a valid label string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Sample")]
    pub sample: String,
    #[serde(rename = "C2 Score")]
    pub score: u32,
    #[serde(rename = "% of C2 Score")]
    pub score_pct: f64,
    #[serde(rename = "14q32 Classification")]
    pub locus_14q32: String,
    #[serde(rename = "Epigenetic Classification")]
    pub epigenetic: Option<String>,
    #[serde(rename = "MRS Classification")]
    pub mrs: Option<String>,
}

/// Merge the per-sample calls into the output schema, preserving the tumor
/// column order of the input dataset.
pub fn run_stage7(calls: &[SampleCall]) -> Vec<ResultRow> {
    calls
        .iter()
        .map(|call| ResultRow {
            sample: call.sample.clone(),
            score: call.score,
            score_pct: call.subtype.percentage,
            locus_14q32: call.locus_14q32.as_str().to_string(),
            epigenetic: call.epigenetic.map(|e| e.as_str().to_string()),
            mrs: call.mrs.map(|m| m.as_str().to_string()),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_assemble.rs"]
mod tests;
