// Fixed-size family types: Single and Couple
use shared_types::{CompositionViolation, Field, HouseholdComposition, Severity};

/// Checks that fixed-size family types carry their preset counts
pub fn check_fixed_size(record: &HouseholdComposition) -> Vec<CompositionViolation> {
    let Some(expected) = record.family_type.fixed_size() else {
        return Vec::new();
    };

    let mut violations = Vec::new();

    if record.total_members != expected {
        violations.push(CompositionViolation {
            rule: "fixed-household-size".to_string(),
            severity: Severity::Critical,
            field: Field::TotalMembers,
            message: format!(
                "a {} household has exactly {} member(s) (found: {})",
                record.family_type, expected, record.total_members
            ),
        });
    }

    if record.children != 0 {
        violations.push(CompositionViolation {
            rule: "fixed-no-children".to_string(),
            severity: Severity::Critical,
            field: Field::Children,
            message: format!(
                "a {} household has no children (found: {})",
                record.family_type, record.children
            ),
        });
    }

    violations
}
