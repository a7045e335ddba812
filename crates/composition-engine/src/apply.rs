//! The household composition transition function
//!
//! `apply` is the sole way a composition record changes. It is pure and
//! total: out-of-domain values clamp to the nearest legal bound, edits to
//! locked fields are no-ops, and every returned record satisfies the
//! composition invariants checked by [`crate::rules::check`].

use shared_types::{FamilyType, Field, HouseholdComposition};

use crate::bounds::{
    elderly_cap, field_editable, CHILDREN_MAX, CHILDREN_MIN, ELDERLY_MAX, ELDERLY_MIN,
    TOTAL_MEMBERS_MAX, TOTAL_MEMBERS_MIN,
};
use crate::input::{clamp_count, parse_count};

/// One user edit to a composition field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    FamilyType(FamilyType),
    TotalMembers(i64),
    Children(i64),
    Elderly(i64),
}

impl Edit {
    pub fn field(&self) -> Field {
        match self {
            Edit::FamilyType(_) => Field::FamilyType,
            Edit::TotalMembers(_) => Field::TotalMembers,
            Edit::Children(_) => Field::Children,
            Edit::Elderly(_) => Field::Elderly,
        }
    }
}

/// Apply one edit and return the next valid record
///
/// Editing a field that [`field_editable`] reports locked returns the record
/// unchanged; callers are expected to disable those controls, but the engine
/// stays safe if they don't.
pub fn apply(record: HouseholdComposition, edit: Edit) -> HouseholdComposition {
    let mut next = record;

    match edit {
        Edit::FamilyType(family_type) => {
            next.family_type = family_type;
            match family_type {
                FamilyType::Single => {
                    next.total_members = 1;
                    next.children = 0;
                }
                FamilyType::Couple => {
                    next.total_members = 2;
                    next.children = 0;
                }
                FamilyType::NuclearFamily => {
                    next.elderly = 0;
                    // A nuclear family cannot be sized below 2; reset to the
                    // step default when coming from a smaller household.
                    if record.total_members < 2 {
                        next.total_members = 3;
                    }
                }
                FamilyType::JointFamily => {
                    // Existing counts are retained and re-validated below
                    // against the current household size.
                }
            }
            next.elderly = next
                .elderly
                .min(elderly_cap(next.family_type, next.total_members));
        }
        Edit::TotalMembers(value) => {
            if field_editable(&record, Field::TotalMembers) {
                next.total_members = clamp_count(value, TOTAL_MEMBERS_MIN, TOTAL_MEMBERS_MAX);
                next.elderly = next
                    .elderly
                    .min(elderly_cap(next.family_type, next.total_members));
            }
        }
        Edit::Children(value) => {
            if field_editable(&record, Field::Children) {
                next.children = clamp_count(value, CHILDREN_MIN, CHILDREN_MAX);
            }
        }
        Edit::Elderly(value) => {
            if field_editable(&record, Field::Elderly) {
                let requested = clamp_count(value, ELDERLY_MIN, ELDERLY_MAX);
                next.elderly = requested.min(elderly_cap(record.family_type, record.total_members));
            }
        }
    }

    next
}

/// Apply a raw form value to `field`
///
/// Numeric fields parse with a default-to-domain-minimum policy; an
/// unrecognized family-type label leaves the record unchanged (a select
/// control cannot normally produce one).
pub fn apply_raw(
    record: HouseholdComposition,
    field: Field,
    raw: &str,
) -> HouseholdComposition {
    let edit = match field {
        Field::FamilyType => match FamilyType::parse_label(raw) {
            Ok(family_type) => Edit::FamilyType(family_type),
            Err(_) => return record,
        },
        Field::TotalMembers => {
            Edit::TotalMembers(parse_count(raw, i64::from(TOTAL_MEMBERS_MIN)))
        }
        Field::Children => Edit::Children(parse_count(raw, i64::from(CHILDREN_MIN))),
        Field::Elderly => Edit::Elderly(parse_count(raw, i64::from(ELDERLY_MIN))),
    };
    apply(record, edit)
}
