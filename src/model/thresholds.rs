use clap::ValueEnum;

/// Assay the expression values were measured on. Selects the C2 score cutoffs
/// and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AssayType {
    RnaSeq,
    Nanostring,
}

/// Revision of the classification rules. The protocol evolved in place; each
/// revision is pinned here explicitly instead of silently superseding the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolVersion {
    /// Fixed 0.5/2 score cutoffs, fixed 9.67 PUMA cutoff.
    V2,
    /// Assay-dependent score cutoffs, baseline-relative PUMA cutoff.
    V3,
}

/// PUMA decision rule. V2 compared the raw tumor value against a fixed
/// cutoff; V3 compares against an offset above the mean non-tumor value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PumaRule {
    FixedCutoff(f64),
    BaselineOffset(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCutoffs {
    pub down: f64,
    pub up: f64,
}

/// Immutable rule configuration threaded explicitly into every classifier.
#[derive(Debug, Clone)]
pub struct ThresholdProfile {
    pub version: ProtocolVersion,
    pub rnaseq_cutoffs: ScoreCutoffs,
    pub nanostring_cutoffs: ScoreCutoffs,
    pub intermediate_low: f64,
    pub intermediate_high: f64,
    pub vim_cutoff: f64,
    pub locus_ratio_min: f64,
    pub locus_genes_min: u32,
    pub cpg_percent_cutoff: f64,
    pub puma_rule: PumaRule,
}

impl ThresholdProfile {
    pub fn protocol_v2() -> Self {
        Self {
            version: ProtocolVersion::V2,
            rnaseq_cutoffs: ScoreCutoffs { down: 0.5, up: 2.0 },
            nanostring_cutoffs: ScoreCutoffs { down: 0.5, up: 2.0 },
            intermediate_low: 40.0,
            intermediate_high: 60.0,
            vim_cutoff: 6.5,
            locus_ratio_min: 10.0,
            locus_genes_min: 1,
            cpg_percent_cutoff: 6.6,
            puma_rule: PumaRule::FixedCutoff(9.67),
        }
    }

    pub fn protocol_v3() -> Self {
        let mut base = Self::protocol_v2();
        base.version = ProtocolVersion::V3;
        base.rnaseq_cutoffs = ScoreCutoffs { down: 0.25, up: 4.0 };
        base.puma_rule = PumaRule::BaselineOffset(7.17);
        base
    }

    pub fn for_version(version: ProtocolVersion) -> Self {
        match version {
            ProtocolVersion::V2 => Self::protocol_v2(),
            ProtocolVersion::V3 => Self::protocol_v3(),
        }
    }

    pub fn score_cutoffs(&self, assay: AssayType) -> ScoreCutoffs {
        match assay {
            AssayType::RnaSeq => self.rnaseq_cutoffs,
            AssayType::Nanostring => self.nanostring_cutoffs,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
