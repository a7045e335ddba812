//! Wizard session state
//!
//! One session owns the full intake form: profile, location, household
//! composition, and health conditions. The household record is only ever
//! changed through the composition engine, so it is valid at every point in
//! the session's life.

use chrono::Utc;
use composition_engine::{apply, apply_raw, check, field_constraint, Edit, FieldConstraint};
use serde::{Deserialize, Serialize};
use shared_types::profile::{AGE_MAX, AGE_MIN, DISTANCE_MAX_KM, DISTANCE_MIN_KM};
use shared_types::{
    AdvisoryRequest, AdvisoryResponse, CompositionViolation, Field, HealthCondition,
    HouseholdComposition, LocationPreferences, RecommendationRequest, RecommendationResponse,
    ResultsBundle, UserProfile,
};
use thiserror::Error;

use crate::health::HealthSelection;
use crate::steps::WizardStep;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("wizard step \"{0}\" is incomplete")]
    IncompleteStep(WizardStep),

    #[error("household composition failed validation: {0:?}")]
    InvalidHousehold(Vec<CompositionViolation>),
}

/// In-memory state of one intake wizard run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSession {
    step: WizardStep,
    profile: UserProfile,
    location: LocationPreferences,
    household: HouseholdComposition,
    health: HealthSelection,
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            step: WizardStep::PersonalInfo,
            profile: UserProfile::default(),
            location: LocationPreferences::default(),
            household: HouseholdComposition::default(),
            health: HealthSelection::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn location(&self) -> &LocationPreferences {
        &self.location
    }

    pub fn household(&self) -> HouseholdComposition {
        self.household
    }

    pub fn health(&self) -> &HealthSelection {
        &self.health
    }

    // ---- Personal info ----

    pub fn set_name(&mut self, name: &str) {
        self.profile.name = name.to_string();
    }

    pub fn set_age(&mut self, age: i64) {
        self.profile.age = age.clamp(i64::from(AGE_MIN), i64::from(AGE_MAX)) as u8;
    }

    pub fn set_profession(&mut self, profession: &str) {
        self.profile.profession = profession.to_string();
    }

    // ---- Location ----

    pub fn set_current_city(&mut self, city: &str) {
        self.location.current_city = city.to_string();
    }

    pub fn set_max_distance_km(&mut self, distance: i64) {
        self.location.max_distance_km =
            distance.clamp(i64::from(DISTANCE_MIN_KM), i64::from(DISTANCE_MAX_KM)) as u32;
    }

    /// Set the monthly budget from raw text input
    ///
    /// Non-digits are stripped (the form swallows them as you type); an
    /// input without any digits clears the budget.
    pub fn set_monthly_budget_raw(&mut self, raw: &str) {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        self.location.monthly_budget = if digits.is_empty() {
            None
        } else {
            Some(digits.parse::<u64>().unwrap_or(u64::MAX).min(u32::MAX as u64) as u32)
        };
    }

    // ---- Family & health ----

    /// Route one household edit through the composition engine
    pub fn edit_household(&mut self, edit: Edit) {
        let next = apply(self.household, edit);
        tracing::debug!(
            field = %edit.field(),
            changed = next != self.household,
            "household edit"
        );
        self.household = next;
    }

    /// Route a raw form value through the engine's loose-input boundary
    pub fn edit_household_raw(&mut self, field: Field, raw: &str) {
        self.household = apply_raw(self.household, field, raw);
    }

    /// Render-time constraint for one household control
    pub fn household_constraint(&self, field: Field) -> FieldConstraint {
        field_constraint(&self.household, field)
    }

    pub fn toggle_health(&mut self, condition: HealthCondition) {
        self.health.toggle(condition);
    }

    // ---- Navigation ----

    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::PersonalInfo => {
                !self.profile.name.trim().is_empty() && !self.profile.profession.is_empty()
            }
            WizardStep::Location => !self.location.current_city.is_empty(),
            // The engine keeps the household valid by construction
            WizardStep::FamilyHealth => true,
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.step_complete(self.step)
    }

    /// Move to the next step; the current one must be complete
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if !self.can_proceed() {
            return Err(WizardError::IncompleteStep(self.step));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move to the previous step, if any
    pub fn back(&mut self) -> Option<WizardStep> {
        let previous = self.step.previous()?;
        self.step = previous;
        Some(previous)
    }

    // ---- Submission ----

    /// Build the recommendation request once every step is complete
    pub fn recommendation_request(&self) -> Result<RecommendationRequest, WizardError> {
        for step in WizardStep::all() {
            if !self.step_complete(step) {
                return Err(WizardError::IncompleteStep(step));
            }
        }

        // Defensive audit; a session that only edited through the engine
        // cannot fail this.
        let violations = check(&self.household);
        if !violations.is_empty() {
            return Err(WizardError::InvalidHousehold(violations));
        }

        Ok(RecommendationRequest {
            current_city: self.location.current_city.clone(),
            age: self.profile.age,
            profession: self.profile.profession.clone(),
            max_distance_km: self.location.max_distance_km,
            monthly_budget: self.location.monthly_budget,
            family_type: self.household.family_type,
            total_members: self.household.total_members,
            children: self.household.children,
            elderly: self.household.elderly,
            health_conditions: self.health.to_vec(),
        })
    }

    /// Build the advisory request from the recommendation response
    pub fn advisory_request(&self, response: &RecommendationResponse) -> AdvisoryRequest {
        AdvisoryRequest {
            name: self.profile.name.clone(),
            age: self.profile.age,
            profession: self.profile.profession.clone(),
            current_city: self.location.current_city.clone(),
            current_aqi: response.current_aqi,
            family_type: self.household.family_type,
            total_members: self.household.total_members,
            children: self.household.children,
            elderly: self.household.elderly,
            health_conditions: self.health.to_vec(),
            recommendations: response.recommendations.clone(),
            readiness_score: response.readiness_score,
            health_urgency: response.health_urgency,
        }
    }

    /// Assemble the final results bundle handed to the results view
    pub fn results_bundle(
        &self,
        response: RecommendationResponse,
        advisory: AdvisoryResponse,
    ) -> ResultsBundle {
        ResultsBundle {
            user_profile: self.profile.clone(),
            location: self.location.clone(),
            family_type: self.household.family_type,
            total_members: self.household.total_members,
            children: self.household.children,
            elderly: self.household.elderly,
            health_conditions: self.health.to_vec(),
            recommendations: response.recommendations,
            current_aqi: response.current_aqi,
            readiness_score: response.readiness_score,
            health_urgency: response.health_urgency,
            health_sensitivity: response.health_sensitivity,
            advisory: advisory.advisory,
            generated_at: Utc::now().timestamp() as u64,
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::FamilyType;

    fn complete_session() -> WizardSession {
        let mut session = WizardSession::new();
        session.set_name("Priya Sharma");
        session.set_age(34);
        session.set_profession("Software Engineer");
        session.set_current_city("Delhi");
        session.set_monthly_budget_raw("20000");
        session
    }

    #[test]
    fn test_cannot_advance_past_incomplete_step() {
        let mut session = WizardSession::new();
        assert!(matches!(
            session.advance(),
            Err(WizardError::IncompleteStep(WizardStep::PersonalInfo))
        ));

        session.set_name("Priya");
        assert!(session.advance().is_err()); // profession still missing

        session.set_profession("Teacher");
        assert_eq!(session.advance().unwrap(), WizardStep::Location);
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let mut session = complete_session();
        session.advance().unwrap();
        assert_eq!(session.back(), Some(WizardStep::PersonalInfo));
        assert_eq!(session.back(), None);
        assert_eq!(session.step(), WizardStep::PersonalInfo);
    }

    #[test]
    fn test_household_edits_go_through_engine() {
        let mut session = WizardSession::new();
        session.edit_household(Edit::FamilyType(FamilyType::Couple));
        session.edit_household(Edit::TotalMembers(9)); // locked, ignored
        session.edit_household(Edit::Elderly(9)); // clamped to cap

        let household = session.household();
        assert_eq!(household.total_members, 2);
        assert_eq!(household.elderly, 2);
    }

    #[test]
    fn test_raw_edit_parses_form_text() {
        let mut session = WizardSession::new();
        session.edit_household_raw(Field::FamilyType, "Joint Family");
        session.edit_household_raw(Field::TotalMembers, "12");
        session.edit_household_raw(Field::Elderly, "nope");

        let household = session.household();
        assert_eq!(household.family_type, FamilyType::JointFamily);
        assert_eq!(household.total_members, 12);
        assert_eq!(household.elderly, 0);
    }

    #[test]
    fn test_budget_parsing() {
        let mut session = WizardSession::new();

        session.set_monthly_budget_raw("25,000");
        assert_eq!(session.location().monthly_budget, Some(25000));

        session.set_monthly_budget_raw("rs 18000/-");
        assert_eq!(session.location().monthly_budget, Some(18000));

        session.set_monthly_budget_raw("");
        assert_eq!(session.location().monthly_budget, None);

        session.set_monthly_budget_raw("no idea");
        assert_eq!(session.location().monthly_budget, None);
    }

    #[test]
    fn test_age_and_distance_clamp() {
        let mut session = WizardSession::new();
        session.set_age(5);
        assert_eq!(session.profile().age, 18);
        session.set_age(200);
        assert_eq!(session.profile().age, 80);

        session.set_max_distance_km(10);
        assert_eq!(session.location().max_distance_km, 100);
        session.set_max_distance_km(99999);
        assert_eq!(session.location().max_distance_km, 2500);
    }

    #[test]
    fn test_request_requires_all_steps() {
        let mut session = WizardSession::new();
        assert!(matches!(
            session.recommendation_request(),
            Err(WizardError::IncompleteStep(WizardStep::PersonalInfo))
        ));

        session.set_name("Priya");
        session.set_profession("Teacher");
        assert!(matches!(
            session.recommendation_request(),
            Err(WizardError::IncompleteStep(WizardStep::Location))
        ));

        session.set_current_city("Delhi");
        assert!(session.recommendation_request().is_ok());
    }

    #[test]
    fn test_request_carries_household_and_health() {
        let mut session = complete_session();
        session.edit_household(Edit::FamilyType(FamilyType::JointFamily));
        session.edit_household(Edit::TotalMembers(6));
        session.edit_household(Edit::Children(2));
        session.edit_household(Edit::Elderly(1));
        session.toggle_health(HealthCondition::Asthma);
        session.toggle_health(HealthCondition::HeartDisease);

        let request = session.recommendation_request().unwrap();
        assert_eq!(request.family_type, FamilyType::JointFamily);
        assert_eq!(request.total_members, 6);
        assert_eq!(request.children, 2);
        assert_eq!(request.elderly, 1);
        assert_eq!(
            request.health_conditions,
            vec![HealthCondition::Asthma, HealthCondition::HeartDisease]
        );
        assert_eq!(request.monthly_budget, Some(20000));
    }

    #[test]
    fn test_results_bundle_carries_everything() {
        let session = complete_session();
        let response = RecommendationResponse {
            recommendations: Vec::new(),
            current_aqi: 180.0,
            readiness_score: 7.0,
            health_urgency: 6.0,
            health_sensitivity: 5.5,
        };
        let advisory = AdvisoryResponse {
            advisory: "Consider the hills.".to_string(),
        };

        let bundle = session.results_bundle(response, advisory);
        assert_eq!(bundle.current_aqi, 180.0);
        assert_eq!(bundle.advisory, "Consider the hills.");
        assert_eq!(bundle.user_profile.name, "Priya Sharma");
        assert!(bundle.generated_at > 0);
    }
}
