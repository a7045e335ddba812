use crate::family::{Field, FamilyType};
use crate::health::HealthCondition;
use crate::profile::{LocationPreferences, UserProfile};

/// Diagnostic produced by the composition rule checks
///
/// The engine keeps records valid by construction, so these only surface in
/// tests and in the wizard's pre-submission check on externally supplied
/// records.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompositionViolation {
    pub rule: String, // e.g., "elderly-cap"
    pub severity: Severity,
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Request body for `POST /api/recommendations`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecommendationRequest {
    pub current_city: String,
    pub age: u8,
    pub profession: String,
    pub max_distance_km: u32,
    pub monthly_budget: Option<u32>,
    pub family_type: FamilyType,
    pub total_members: u8,
    pub children: u8,
    pub elderly: u8,
    pub health_conditions: Vec<HealthCondition>,
}

/// One ranked city from the recommendation service
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CityRecommendation {
    pub city_name: String,
    pub state: String,
    pub distance_km: f64,
    pub target_aqi: f64,
    pub aqi_improvement_percent: f64,
    pub suitability_score: f64,
    pub job_match_score: f64,
    pub healthcare_score: f64,
    pub avg_rent: f64,
    pub life_expectancy_gain_years: f64,
    pub respiratory_risk_reduction: f64,
}

/// Response body for `POST /api/recommendations`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<CityRecommendation>,
    pub current_aqi: f64,
    pub readiness_score: f64,
    pub health_urgency: f64,
    pub health_sensitivity: f64,
}

/// Request body for `POST /api/advisory`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdvisoryRequest {
    pub name: String,
    pub age: u8,
    pub profession: String,
    pub current_city: String,
    pub current_aqi: f64,
    pub family_type: FamilyType,
    pub total_members: u8,
    pub children: u8,
    pub elderly: u8,
    pub health_conditions: Vec<HealthCondition>,
    pub recommendations: Vec<CityRecommendation>,
    pub readiness_score: f64,
    pub health_urgency: f64,
}

/// Response body for `POST /api/advisory`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdvisoryResponse {
    pub advisory: String,
}

/// Everything the results view needs, assembled after submission
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ResultsBundle {
    pub user_profile: UserProfile,
    pub location: LocationPreferences,
    pub family_type: FamilyType,
    pub total_members: u8,
    pub children: u8,
    pub elderly: u8,
    pub health_conditions: Vec<HealthCondition>,
    pub recommendations: Vec<CityRecommendation>,
    pub current_aqi: f64,
    pub readiness_score: f64,
    pub health_urgency: f64,
    pub health_sensitivity: f64,
    pub advisory: String,
    pub generated_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recommendation_request_wire_names() {
        let request = RecommendationRequest {
            current_city: "Delhi".to_string(),
            age: 34,
            profession: "Software Engineer".to_string(),
            max_distance_km: 500,
            monthly_budget: Some(20000),
            family_type: FamilyType::JointFamily,
            total_members: 6,
            children: 2,
            elderly: 1,
            health_conditions: vec![HealthCondition::Asthma],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["family_type"], "Joint Family");
        assert_eq!(json["total_members"], 6);
        assert_eq!(json["health_conditions"][0], "Asthma");
        assert_eq!(json["monthly_budget"], 20000);
    }

    #[test]
    fn test_recommendation_response_roundtrip() {
        let body = r#"{
            "recommendations": [{
                "city_name": "Shimla",
                "state": "Himachal Pradesh",
                "distance_km": 343.2,
                "target_aqi": 42.0,
                "aqi_improvement_percent": 78.5,
                "suitability_score": 8.7,
                "job_match_score": 6.2,
                "healthcare_score": 7.1,
                "avg_rent": 15000.0,
                "life_expectancy_gain_years": 2.3,
                "respiratory_risk_reduction": 64.0
            }],
            "current_aqi": 196.0,
            "readiness_score": 7.4,
            "health_urgency": 8.1,
            "health_sensitivity": 6.5
        }"#;

        let response: RecommendationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(response.recommendations[0].city_name, "Shimla");

        let back = serde_json::to_value(&response).unwrap();
        assert_eq!(back["current_aqi"], 196.0);
    }
}
