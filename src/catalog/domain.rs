use serde::{Serialize, Serializer};
use std::fmt;

/// One of the eight additive criteria domains.
///
/// Domains 1-6 are clinical, 7-8 are laboratory. Each domain contributes at
/// most one criterion (its highest-weighted checked one) to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    VenousThromboembolism,
    ArterialThromboembolism,
    Microvascular,
    Obstetric,
    CardiacValve,
    Hematology,
    LupusAnticoagulant,
    AplSerology,
}

impl Domain {
    /// All domains in numeric order (D1..D8)
    pub const ALL: [Domain; 8] = [
        Domain::VenousThromboembolism,
        Domain::ArterialThromboembolism,
        Domain::Microvascular,
        Domain::Obstetric,
        Domain::CardiacValve,
        Domain::Hematology,
        Domain::LupusAnticoagulant,
        Domain::AplSerology,
    ];

    /// Domain number as printed in the criteria (1-8)
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based position, suitable for indexing per-domain arrays
    pub fn index(self) -> usize {
        match self {
            Domain::VenousThromboembolism => 0,
            Domain::ArterialThromboembolism => 1,
            Domain::Microvascular => 2,
            Domain::Obstetric => 3,
            Domain::CardiacValve => 4,
            Domain::Hematology => 5,
            Domain::LupusAnticoagulant => 6,
            Domain::AplSerology => 7,
        }
    }

    pub fn from_number(number: u8) -> Option<Domain> {
        match number {
            1..=8 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    pub fn is_clinical(self) -> bool {
        self.number() <= 6
    }

    pub fn is_laboratory(self) -> bool {
        !self.is_clinical()
    }

    /// Short name used in score tables
    pub fn name(self) -> &'static str {
        match self {
            Domain::VenousThromboembolism => "Venous thromboembolism",
            Domain::ArterialThromboembolism => "Arterial thromboembolism",
            Domain::Microvascular => "Microvascular",
            Domain::Obstetric => "Obstetric",
            Domain::CardiacValve => "Cardiac valve",
            Domain::Hematology => "Hematology",
            Domain::LupusAnticoagulant => "Laboratory (lupus anticoagulant)",
            Domain::AplSerology => "Laboratory (aPL serology)",
        }
    }

    /// Full heading shown above the domain's criteria page
    pub fn heading(self) -> &'static str {
        match self {
            Domain::VenousThromboembolism => "D1. Macrovascular (Venous thromboembolism)",
            Domain::ArterialThromboembolism => "D2. Macrovascular (Arterial thromboembolism)",
            Domain::Microvascular => "D3. Microvascular",
            Domain::Obstetric => "D4. Obstetric",
            Domain::CardiacValve => "D5. Cardiac valve",
            Domain::Hematology => "D6. Hematology",
            Domain::LupusAnticoagulant => {
                "D7. aPL test by coagulation-based functional assay (lupus anticoagulant test [LAC])"
            }
            Domain::AplSerology => {
                "D8. aPL test by solid phase assay (anti-cardiolipin antibody [aCL] ELISA and/or \
                 anti-β2-glycoprotein-I antibody [aβ2GPI] ELISA [persistent])"
            }
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.number())
    }
}

impl Serialize for Domain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}
