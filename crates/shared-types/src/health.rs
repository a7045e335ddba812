//! Family health conditions reported to the advisory service

use serde::{Deserialize, Serialize};

/// Health conditions present in the household
///
/// `None` is a real selection (the service treats it as "no conditions"),
/// not an absent value. The wizard keeps it mutually exclusive with the
/// concrete conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthCondition {
    None,
    Asthma,
    #[serde(rename = "COPD")]
    Copd,
    Bronchitis,
    #[serde(rename = "Respiratory Allergies")]
    RespiratoryAllergies,
    #[serde(rename = "Lung Disease")]
    LungDisease,
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    #[serde(rename = "Elderly Respiratory Issues")]
    ElderlyRespiratoryIssues,
    Other,
}

impl HealthCondition {
    pub fn label(&self) -> &'static str {
        match self {
            HealthCondition::None => "None",
            HealthCondition::Asthma => "Asthma",
            HealthCondition::Copd => "COPD",
            HealthCondition::Bronchitis => "Bronchitis",
            HealthCondition::RespiratoryAllergies => "Respiratory Allergies",
            HealthCondition::LungDisease => "Lung Disease",
            HealthCondition::HeartDisease => "Heart Disease",
            HealthCondition::ElderlyRespiratoryIssues => "Elderly Respiratory Issues",
            HealthCondition::Other => "Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HealthCondition::None => "No health conditions in family",
            HealthCondition::Asthma => "Chronic respiratory condition",
            HealthCondition::Copd => "Chronic obstructive pulmonary disease",
            HealthCondition::Bronchitis => "Inflammation of bronchial tubes",
            HealthCondition::RespiratoryAllergies => "Dust, pollen, or air allergies",
            HealthCondition::LungDisease => "Other lung-related conditions",
            HealthCondition::HeartDisease => "Cardiovascular conditions",
            HealthCondition::ElderlyRespiratoryIssues => "Age-related breathing problems",
            HealthCondition::Other => "Specify other health conditions",
        }
    }

    /// All conditions in display order
    pub fn all() -> [HealthCondition; 9] {
        [
            HealthCondition::None,
            HealthCondition::Asthma,
            HealthCondition::Copd,
            HealthCondition::Bronchitis,
            HealthCondition::RespiratoryAllergies,
            HealthCondition::LungDisease,
            HealthCondition::HeartDisease,
            HealthCondition::ElderlyRespiratoryIssues,
            HealthCondition::Other,
        ]
    }
}

impl std::fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
