//! Property-based tests for the composition engine
//!
//! The engine claims three things about arbitrary edit streams: invariants
//! hold after every step, re-applying an edit changes nothing, and
//! out-of-domain values clamp instead of failing. All three are exercised
//! here over randomized sequences.

use composition_engine::{apply, check, field_editable, Edit, HouseholdComposition};
use proptest::prelude::*;
use shared_types::FamilyType;

fn any_family_type() -> impl Strategy<Value = FamilyType> {
    prop_oneof![
        Just(FamilyType::Single),
        Just(FamilyType::Couple),
        Just(FamilyType::NuclearFamily),
        Just(FamilyType::JointFamily),
    ]
}

/// Edits spanning well inside and far outside every domain
fn any_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        any_family_type().prop_map(Edit::FamilyType),
        (-100i64..1000).prop_map(Edit::TotalMembers),
        (-100i64..1000).prop_map(Edit::Children),
        (-100i64..1000).prop_map(Edit::Elderly),
    ]
}

fn edit_sequence() -> impl Strategy<Value = Vec<Edit>> {
    prop::collection::vec(any_edit(), 0..40)
}

proptest! {
    /// Property: every record an edit stream produces passes all rules
    #[test]
    fn invariants_hold_after_every_edit(edits in edit_sequence()) {
        let mut record = HouseholdComposition::default();
        prop_assert!(check(&record).is_empty());

        for edit in edits {
            record = apply(record, edit);
            let violations = check(&record);
            prop_assert!(
                violations.is_empty(),
                "edit {:?} produced invalid record {:?}: {:?}",
                edit,
                record,
                violations
            );
        }
    }

    /// Property: applying the same edit twice equals applying it once
    #[test]
    fn reapplication_is_idempotent(
        setup in edit_sequence(),
        edit in any_edit(),
    ) {
        let record = setup
            .into_iter()
            .fold(HouseholdComposition::default(), apply);

        let once = apply(record, edit);
        let twice = apply(once, edit);
        prop_assert_eq!(once, twice);
    }

    /// Property: elderly edits on a couple clamp to 2 regardless of history
    #[test]
    fn couple_elderly_clamps_to_two(
        setup in edit_sequence(),
        requested in 3i64..1000,
    ) {
        let record = setup
            .into_iter()
            .fold(HouseholdComposition::default(), apply);
        let couple = apply(record, Edit::FamilyType(FamilyType::Couple));

        let after = apply(couple, Edit::Elderly(requested));
        prop_assert_eq!(after.elderly, 2);
    }

    /// Property: edits to locked fields never change the record
    #[test]
    fn locked_edits_are_noops(
        setup in edit_sequence(),
        edit in any_edit(),
    ) {
        let record = setup
            .into_iter()
            .fold(HouseholdComposition::default(), apply);

        if !field_editable(&record, edit.field()) {
            prop_assert_eq!(apply(record, edit), record);
        }
    }

    /// Property: total-member counts stay inside [1, 20] whatever is typed
    #[test]
    fn totals_stay_in_domain(edits in edit_sequence()) {
        let record = edits
            .into_iter()
            .fold(HouseholdComposition::default(), apply);

        prop_assert!((1u8..=20).contains(&record.total_members));
        prop_assert!(record.children <= 10);
        prop_assert!(record.elderly <= record.total_members);
    }
}
