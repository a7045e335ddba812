// Absolute field domains, independent of family type
use shared_types::{CompositionViolation, Field, HouseholdComposition, Severity};

use crate::bounds::{CHILDREN_MAX, ELDERLY_MAX, TOTAL_MEMBERS_MAX, TOTAL_MEMBERS_MIN};

/// Checks every count against its absolute domain
pub fn check_field_domains(record: &HouseholdComposition) -> Vec<CompositionViolation> {
    let mut violations = Vec::new();

    if record.total_members < TOTAL_MEMBERS_MIN || record.total_members > TOTAL_MEMBERS_MAX {
        violations.push(CompositionViolation {
            rule: "member-domain".to_string(),
            severity: Severity::Critical,
            field: Field::TotalMembers,
            message: format!(
                "total members must be between {} and {} (found: {})",
                TOTAL_MEMBERS_MIN, TOTAL_MEMBERS_MAX, record.total_members
            ),
        });
    }

    if record.children > CHILDREN_MAX {
        violations.push(CompositionViolation {
            rule: "children-domain".to_string(),
            severity: Severity::Critical,
            field: Field::Children,
            message: format!(
                "children count exceeds maximum of {} (found: {})",
                CHILDREN_MAX, record.children
            ),
        });
    }

    if record.elderly > ELDERLY_MAX {
        violations.push(CompositionViolation {
            rule: "elderly-domain".to_string(),
            severity: Severity::Critical,
            field: Field::Elderly,
            message: format!(
                "elderly count exceeds maximum of {} (found: {})",
                ELDERLY_MAX, record.elderly
            ),
        });
    }

    violations
}
