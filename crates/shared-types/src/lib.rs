pub mod family;
pub mod health;
pub mod profile;
pub mod types;

pub use family::{FamilyType, Field, HouseholdComposition, ParseFamilyTypeError};
pub use health::HealthCondition;
pub use profile::{LocationPreferences, UserProfile};
pub use types::{
    AdvisoryRequest, AdvisoryResponse, CityRecommendation, CompositionViolation,
    RecommendationRequest, RecommendationResponse, ResultsBundle, Severity,
};
