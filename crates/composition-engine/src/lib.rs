//! Family composition constraint engine
//!
//! Keeps the four household fields (family type, total members, children,
//! elderly) mutually consistent as a wizard user edits them in any order.
//! The caller owns a [`HouseholdComposition`] value and routes every edit
//! through [`apply`]; [`field_constraint`] answers, per render, whether a
//! control is enabled and which bounds it should enforce.
//!
//! The engine never errors: out-of-domain input clamps to the nearest legal
//! bound and edits to locked fields are ignored.

pub mod apply;
pub mod bounds;
pub mod input;
pub mod rules;

pub use apply::{apply, apply_raw, Edit};
pub use bounds::{elderly_cap, field_constraint, field_editable, FieldConstraint};
pub use rules::check;

pub use shared_types::HouseholdComposition;
