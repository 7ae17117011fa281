use crate::model::labels::{Epigenetic, Locus14q32, Mrs, Subtype};

/// Combine the three upstream calls into the final MRS class.
///
/// Decision table:
///   Strong   + Epi-CB     + C2-Pure   -> MRS-3b
///   Strong   + Epi-CB     + other     -> MRS-3a
///   Strong   + not Epi-CB             -> MRS-2
///   Moderate + Epi-CB                 -> MRS-2
///   Moderate + not Epi-CB             -> MRS-1
///
/// A missing epigenetic call leaves the MRS class missing.
pub fn classify_mrs(
    locus: Locus14q32,
    epigenetic: Option<Epigenetic>,
    subtype: Subtype,
) -> Option<Mrs> {
    let epi = epigenetic?;
    let is_epi_cb = epi == Epigenetic::EpiCb;
    let mrs = match (locus, is_epi_cb) {
        (Locus14q32::Strong, true) => {
            if subtype == Subtype::C2Pure {
                Mrs::Mrs3b
            } else {
                Mrs::Mrs3a
            }
        }
        (Locus14q32::Strong, false) => Mrs::Mrs2,
        (Locus14q32::Moderate, true) => Mrs::Mrs2,
        (Locus14q32::Moderate, false) => Mrs::Mrs1,
    };
    Some(mrs)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_mrs.rs"]
mod tests;
