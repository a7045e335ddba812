//! Composition invariant checks
//!
//! Each module validates one invariant family and reports violations in the
//! shared diagnostic format. `apply` re-establishes all of them on every
//! edit, so these checks pass on anything the engine returns; they exist for
//! tests and for auditing records that arrive from outside the engine.

pub mod domains;
pub mod elderly_cap;
pub mod fixed_size;
pub mod nuclear;

use shared_types::{CompositionViolation, HouseholdComposition};

/// Run every composition rule against a record
pub fn check(record: &HouseholdComposition) -> Vec<CompositionViolation> {
    let mut violations = Vec::new();
    violations.extend(domains::check_field_domains(record));
    violations.extend(elderly_cap::check_elderly_cap(record));
    violations.extend(fixed_size::check_fixed_size(record));
    violations.extend(nuclear::check_no_elderly(record));
    violations
}
