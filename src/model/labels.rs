/// C1/C2 subtype call derived from the C2 score percentage and the VIM ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    C1Subtype,
    Intermediate,
    C2Pure,
    C2B,
}

impl Subtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Subtype::C1Subtype => "C1-subtype",
            Subtype::Intermediate => "Intermediate",
            Subtype::C2Pure => "C2-Pure",
            Subtype::C2B => "C2B",
        }
    }
}

/// 14q32 locus overexpression signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locus14q32 {
    Strong,
    Moderate,
}

impl Locus14q32 {
    pub fn as_str(self) -> &'static str {
        match self {
            Locus14q32::Strong => "Strong",
            Locus14q32::Moderate => "Moderate",
        }
    }
}

/// Epigenetic call from either the CpG array or the PUMA assay. A sample with
/// neither measurement carries no call; downstream code holds
/// `Option<Epigenetic>` and pattern-matches the absence explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epigenetic {
    EpiCb,
    EpiCa,
    NonEpiCb,
}

impl Epigenetic {
    pub fn as_str(self) -> &'static str {
        match self {
            Epigenetic::EpiCb => "Epi-CB",
            Epigenetic::EpiCa => "Epi-CA",
            Epigenetic::NonEpiCb => "Non-Epi-CB",
        }
    }
}

/// Final molecular risk stratification class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mrs {
    Mrs1,
    Mrs2,
    Mrs3a,
    Mrs3b,
}

impl Mrs {
    pub fn as_str(self) -> &'static str {
        match self {
            Mrs::Mrs1 => "MRS-1",
            Mrs::Mrs2 => "MRS-2",
            Mrs::Mrs3a => "MRS-3a",
            Mrs::Mrs3b => "MRS-3b",
        }
    }
}
