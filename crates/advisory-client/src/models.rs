//! Wire models owned by the advisory service's city-description endpoint
//!
//! The request/response DTOs shared with the wizard live in `shared-types`;
//! these are only consumed by result views, so they stay local to the
//! client crate.

use serde::{Deserialize, Serialize};

/// Narrative city profile for a recommended destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDescription {
    pub crime_rate: CrimeRateSection,
    pub education: EducationSection,
    pub communities: CommunitiesSection,
    pub connectivity: ConnectivitySection,
    pub hospitals: HospitalsSection,
    pub geography: GeographySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeRateSection {
    pub security_score: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationSection {
    pub score: f64,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunitiesSection {
    pub demographics: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivitySection {
    pub nearest_metro: String,
    pub distance_km: f64,
    pub description: String,
    pub transport_options: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalsSection {
    pub score: f64,
    pub description: String,
    pub facilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographySection {
    pub terrain: String,
    pub climate: String,
    pub elevation_m: f64,
    pub description: String,
}
