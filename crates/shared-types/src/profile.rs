//! Applicant profile and location preferences collected by the wizard

use serde::{Deserialize, Serialize};

pub const AGE_MIN: u8 = 18;
pub const AGE_MAX: u8 = 80;

pub const DISTANCE_MIN_KM: u32 = 100;
pub const DISTANCE_MAX_KM: u32 = 2500;

/// Personal details from the first wizard step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub profession: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 30,
            profession: String::new(),
        }
    }
}

/// Location details from the second wizard step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPreferences {
    pub current_city: String,
    pub max_distance_km: u32,
    /// Monthly rent budget; the form treats blank input as "no budget"
    pub monthly_budget: Option<u32>,
}

impl Default for LocationPreferences {
    fn default() -> Self {
        Self {
            current_city: String::new(),
            max_distance_km: 500,
            monthly_budget: None,
        }
    }
}
