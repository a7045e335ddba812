//! Field domains and dynamic bounds for the household composition record

use serde::{Deserialize, Serialize};
use shared_types::{FamilyType, Field, HouseholdComposition};

pub const TOTAL_MEMBERS_MIN: u8 = 1;
pub const TOTAL_MEMBERS_MAX: u8 = 20;

pub const CHILDREN_MIN: u8 = 0;
pub const CHILDREN_MAX: u8 = 10;

pub const ELDERLY_MIN: u8 = 0;
/// Absolute elderly ceiling; the effective maximum is [`elderly_cap`]
pub const ELDERLY_MAX: u8 = 20;

/// Maximum legal elderly count for the given family type and size
///
/// A joint family may be entirely elderly; that permissive cap matches the
/// service contract and is deliberate.
pub fn elderly_cap(family_type: FamilyType, total_members: u8) -> u8 {
    match family_type {
        FamilyType::Single => 1,
        FamilyType::Couple => 2,
        FamilyType::NuclearFamily => 0,
        FamilyType::JointFamily => total_members,
    }
}

/// Whether a field currently accepts input
///
/// Single/Couple fix the household size and child count; a nuclear family
/// forces elderly to zero. The family-type selector itself is always
/// editable.
pub fn field_editable(record: &HouseholdComposition, field: Field) -> bool {
    match record.family_type {
        FamilyType::Single | FamilyType::Couple => {
            !matches!(field, Field::TotalMembers | Field::Children)
        }
        FamilyType::NuclearFamily => !matches!(field, Field::Elderly),
        FamilyType::JointFamily => true,
    }
}

/// Editability plus the numeric bounds a form control should enforce
///
/// Re-derived from the record on every render rather than stored, so the
/// "disabled" flags can never drift from the underlying state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConstraint {
    pub editable: bool,
    /// Inclusive numeric bounds; `None` for the family-type selector
    pub bounds: Option<(u8, u8)>,
}

/// Render-time constraint for one field of the record
pub fn field_constraint(record: &HouseholdComposition, field: Field) -> FieldConstraint {
    let bounds = match field {
        Field::FamilyType => None,
        Field::TotalMembers => Some((TOTAL_MEMBERS_MIN, TOTAL_MEMBERS_MAX)),
        Field::Children => Some((CHILDREN_MIN, CHILDREN_MAX)),
        Field::Elderly => Some((
            ELDERLY_MIN,
            elderly_cap(record.family_type, record.total_members),
        )),
    };
    FieldConstraint {
        editable: field_editable(record, field),
        bounds,
    }
}
