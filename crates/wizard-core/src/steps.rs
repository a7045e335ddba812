//! Wizard step sequence

use serde::{Deserialize, Serialize};

/// The three intake steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    Location,
    FamilyHealth,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Location => "Location",
            WizardStep::FamilyHealth => "Family & Health",
        }
    }

    /// Zero-based position in the sequence
    pub fn index(&self) -> usize {
        match self {
            WizardStep::PersonalInfo => 0,
            WizardStep::Location => 1,
            WizardStep::FamilyHealth => 2,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PersonalInfo => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::FamilyHealth),
            WizardStep::FamilyHealth => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PersonalInfo => None,
            WizardStep::Location => Some(WizardStep::PersonalInfo),
            WizardStep::FamilyHealth => Some(WizardStep::Location),
        }
    }

    pub fn all() -> [WizardStep; 3] {
        [
            WizardStep::PersonalInfo,
            WizardStep::Location,
            WizardStep::FamilyHealth,
        ]
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
