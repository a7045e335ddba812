// Elderly count bounds: household size and the per-type cap
use shared_types::{CompositionViolation, Field, HouseholdComposition, Severity};

use crate::bounds::elderly_cap;

/// Checks the elderly count against the household size and the family-type cap
pub fn check_elderly_cap(record: &HouseholdComposition) -> Vec<CompositionViolation> {
    let mut violations = Vec::new();

    if record.elderly > record.total_members {
        violations.push(CompositionViolation {
            rule: "elderly-within-household".to_string(),
            severity: Severity::Critical,
            field: Field::Elderly,
            message: format!(
                "elderly count {} exceeds household size {}",
                record.elderly, record.total_members
            ),
        });
    }

    let cap = elderly_cap(record.family_type, record.total_members);
    if record.elderly > cap {
        violations.push(CompositionViolation {
            rule: "elderly-cap".to_string(),
            severity: Severity::Critical,
            field: Field::Elderly,
            message: format!(
                "elderly count {} exceeds the {} cap of {}",
                record.elderly, record.family_type, cap
            ),
        });
    }

    violations
}
