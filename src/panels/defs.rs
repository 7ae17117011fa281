/// Row name of the VIM marker used to split C2 into C2-Pure / C2B.
pub const ROW_VIM: &str = "VIM";

/// Row name of the methylation-array summary (mean beta values). This is the
/// only row the normalizer inverts: methylation loss, not gain, is the signal.
pub const ROW_METHYL_ARRAY: &str = "Methyl_Array";

/// Row name of the PUMA assay (percentage of unmethylated Alu repeats).
pub const ROW_PUMA: &str = "PUMA";

/// Genes down-regulated in the C2 subtype (liver-differentiation program).
pub const C1_PANEL: &[&str] = &[
    "ALDH2", "APCS", "APOC4", "AQP9", "C1S", "CYP2E1", "GHR", "HPD",
];

/// Genes up-regulated in the C2 subtype (proliferation program).
pub const C2_PANEL: &[&str] = &[
    "AFP", "BUB1", "DLGAP5", "DUSP9", "E2F5", "IGSF1", "NLE1", "RCN1",
];

/// 14q32 locus genes whose overexpression defines the Strong signature.
pub const LOCUS_14Q32_PANEL: &[&str] = &["DLK1", "MEG3"];

/// Denominator of the C2 score percentage (both panels combined).
pub const SUBTYPE_PANEL_TOTAL: u32 = (C1_PANEL.len() + C2_PANEL.len()) as u32;
