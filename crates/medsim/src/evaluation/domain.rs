use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical scenario a student interviews the simulated patient about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    PepticUlcerDisease,
    AcutePancreatitis,
    FoodPoisoning,
    KidneyStones,
    /// Reserved fallback with no metrics in any domain.
    Unknown,
}

impl Case {
    /// Scored cases in catalog order. `Unknown` is deliberately absent.
    pub const fn known() -> [Self; 4] {
        [
            Self::PepticUlcerDisease,
            Self::AcutePancreatitis,
            Self::FoodPoisoning,
            Self::KidneyStones,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PepticUlcerDisease => "Peptic ulcer disease",
            Self::AcutePancreatitis => "Acute pancreatitis",
            Self::FoodPoisoning => "Food poisoning",
            Self::KidneyStones => "Kidney stones",
            Self::Unknown => "Unknown Case",
        }
    }

    /// Resolve a free-form case name. Never fails: unrecognised names map to
    /// [`Case::Unknown`].
    pub fn resolve(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "peptic ulcer disease" => Self::PepticUlcerDisease,
            "acute pancreatitis" => Self::AcutePancreatitis,
            "food poisoning" => Self::FoodPoisoning,
            "kidney stones" | "kidney stone" | "renal stone" | "renal stones" => {
                Self::KidneyStones
            }
            _ => Self::Unknown,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scoring category shared by every case, in fixed declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "domain1")]
    CommunicationSkills,
    #[serde(rename = "domain2")]
    GeneralHistoryTaking,
    #[serde(rename = "domain3")]
    DiseaseSpecificHistory,
    #[serde(rename = "domain4")]
    Diagnosis,
}

impl Domain {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CommunicationSkills,
            Self::GeneralHistoryTaking,
            Self::DiseaseSpecificHistory,
            Self::Diagnosis,
        ]
    }

    /// Key used by the upstream evaluator's JSON document.
    pub const fn key(self) -> &'static str {
        match self {
            Self::CommunicationSkills => "domain1",
            Self::GeneralHistoryTaking => "domain2",
            Self::DiseaseSpecificHistory => "domain3",
            Self::Diagnosis => "domain4",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|domain| domain.key() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CommunicationSkills => "Communication Skills",
            Self::GeneralHistoryTaking => "General History Taking",
            Self::DiseaseSpecificHistory => "Disease-Specific History",
            Self::Diagnosis => "Diagnosis",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
