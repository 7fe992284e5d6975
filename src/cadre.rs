use serde::{Deserialize, Serialize};

/// Number of worker cadres. All allocation, baseline-share and coefficient
/// vectors have exactly this length.
pub const N_CADRES: usize = 5;

/// The five health-workforce cadres, in the fixed order used by every
/// vector in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadre {
    Clinical,
    Dcsa,
    NursingMidwifery,
    Pharmacy,
    Other,
}

impl Cadre {
    pub const ALL: [Cadre; N_CADRES] = [
        Cadre::Clinical,
        Cadre::Dcsa,
        Cadre::NursingMidwifery,
        Cadre::Pharmacy,
        Cadre::Other,
    ];

    pub fn index(self) -> usize {
        match self {
            Cadre::Clinical => 0,
            Cadre::Dcsa => 1,
            Cadre::NursingMidwifery => 2,
            Cadre::Pharmacy => 3,
            Cadre::Other => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cadre::Clinical => "Clinical",
            Cadre::Dcsa => "DCSA",
            Cadre::NursingMidwifery => "Nursing and Midwifery",
            Cadre::Pharmacy => "Pharmacy",
            Cadre::Other => "Other",
        }
    }
}
