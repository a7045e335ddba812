//! Health-condition multi-select
//!
//! The selection is never empty: `None` stands in when nothing concrete is
//! chosen and is cleared the moment a real condition is toggled on.

use serde::{Deserialize, Serialize};
use shared_types::HealthCondition;

/// Ordered, duplicate-free health-condition selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSelection {
    conditions: Vec<HealthCondition>,
}

impl HealthSelection {
    pub fn new() -> Self {
        Self {
            conditions: vec![HealthCondition::None],
        }
    }

    /// Toggle one condition on or off
    ///
    /// Selecting `None` clears everything else; selecting a concrete
    /// condition removes `None`; removing the last concrete condition
    /// restores `None`.
    pub fn toggle(&mut self, condition: HealthCondition) {
        if condition == HealthCondition::None {
            self.conditions = vec![HealthCondition::None];
            return;
        }

        self.conditions.retain(|&c| c != HealthCondition::None);
        if let Some(pos) = self.conditions.iter().position(|&c| c == condition) {
            self.conditions.remove(pos);
        } else {
            self.conditions.push(condition);
        }

        if self.conditions.is_empty() {
            self.conditions.push(HealthCondition::None);
        }
    }

    pub fn contains(&self, condition: HealthCondition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn as_slice(&self) -> &[HealthCondition] {
        &self.conditions
    }

    pub fn to_vec(&self) -> Vec<HealthCondition> {
        self.conditions.clone()
    }
}

impl Default for HealthSelection {
    fn default() -> Self {
        Self::new()
    }
}
