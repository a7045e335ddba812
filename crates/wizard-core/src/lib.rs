//! Intake wizard state
//!
//! Owns the three-step intake flow: profile, location, and family & health.
//! Household composition edits are delegated to `composition-engine`; this
//! crate adds step gating, the health-condition multi-select, and final
//! request/bundle assembly for the advisory service.

pub mod health;
pub mod session;
pub mod steps;

pub use health::HealthSelection;
pub use session::{WizardError, WizardSession};
pub use steps::WizardStep;
