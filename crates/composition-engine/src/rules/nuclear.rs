// Nuclear families report no elderly members
use shared_types::{CompositionViolation, Field, FamilyType, HouseholdComposition, Severity};

/// Checks that a nuclear family carries a zero elderly count
pub fn check_no_elderly(record: &HouseholdComposition) -> Vec<CompositionViolation> {
    if record.family_type != FamilyType::NuclearFamily || record.elderly == 0 {
        return Vec::new();
    }

    vec![CompositionViolation {
        rule: "nuclear-no-elderly".to_string(),
        severity: Severity::Critical,
        field: Field::Elderly,
        message: format!(
            "a nuclear family has no elderly members (found: {})",
            record.elderly
        ),
    }]
}
