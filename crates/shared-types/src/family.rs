//! Household composition types
//!
//! The family type drives which composition fields are editable and how
//! large the elderly count may grow; the constraint engine in
//! `composition-engine` owns those rules. This module only defines the
//! record and its vocabulary.

use serde::{Deserialize, Serialize};

/// Household family type as used by the advisory service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyType {
    Single,
    Couple,
    #[serde(rename = "Nuclear Family")]
    NuclearFamily,
    #[serde(rename = "Joint Family")]
    JointFamily,
}

impl FamilyType {
    /// Human-readable label, matching the service's wire format
    pub fn label(&self) -> &'static str {
        match self {
            FamilyType::Single => "Single",
            FamilyType::Couple => "Couple",
            FamilyType::NuclearFamily => "Nuclear Family",
            FamilyType::JointFamily => "Joint Family",
        }
    }

    /// Fixed household size for types that do not allow resizing
    pub fn fixed_size(&self) -> Option<u8> {
        match self {
            FamilyType::Single => Some(1),
            FamilyType::Couple => Some(2),
            FamilyType::NuclearFamily | FamilyType::JointFamily => None,
        }
    }

    /// Parse from a label or shorthand (case-insensitive)
    pub fn parse_label(s: &str) -> Result<Self, ParseFamilyTypeError> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(FamilyType::Single),
            "couple" => Ok(FamilyType::Couple),
            "nuclear family" | "nuclear" => Ok(FamilyType::NuclearFamily),
            "joint family" | "joint" => Ok(FamilyType::JointFamily),
            _ => Err(ParseFamilyTypeError(s.trim().to_string())),
        }
    }

    /// All family types in display order
    pub fn all() -> [FamilyType; 4] {
        [
            FamilyType::NuclearFamily,
            FamilyType::JointFamily,
            FamilyType::Single,
            FamilyType::Couple,
        ]
    }
}

impl std::fmt::Display for FamilyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown family type: {0:?}")]
pub struct ParseFamilyTypeError(pub String);

/// Editable fields of a [`HouseholdComposition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FamilyType,
    TotalMembers,
    Children,
    Elderly,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::FamilyType => "family_type",
            Field::TotalMembers => "total_members",
            Field::Children => "children",
            Field::Elderly => "elderly",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The household composition record owned by one wizard session
///
/// Mutated exclusively through `composition_engine::apply`, which keeps the
/// four fields mutually consistent regardless of edit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdComposition {
    pub family_type: FamilyType,
    pub total_members: u8,
    pub children: u8,
    pub elderly: u8,
}

impl Default for HouseholdComposition {
    fn default() -> Self {
        Self {
            family_type: FamilyType::NuclearFamily,
            total_members: 4,
            children: 1,
            elderly: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_family_type_parsing() {
        assert_eq!(
            FamilyType::parse_label("Nuclear Family"),
            Ok(FamilyType::NuclearFamily)
        );
        assert_eq!(FamilyType::parse_label("nuclear"), Ok(FamilyType::NuclearFamily));
        assert_eq!(FamilyType::parse_label("JOINT"), Ok(FamilyType::JointFamily));
        assert_eq!(FamilyType::parse_label("single"), Ok(FamilyType::Single));
        assert_eq!(FamilyType::parse_label(" couple "), Ok(FamilyType::Couple));
        assert!(FamilyType::parse_label("extended").is_err());
    }

    #[test]
    fn test_family_type_wire_format() {
        // The advisory service expects the spaced labels, not enum idents
        assert_eq!(
            serde_json::to_string(&FamilyType::JointFamily).unwrap(),
            "\"Joint Family\""
        );
        assert_eq!(
            serde_json::to_string(&FamilyType::Single).unwrap(),
            "\"Single\""
        );
        let parsed: FamilyType = serde_json::from_str("\"Nuclear Family\"").unwrap();
        assert_eq!(parsed, FamilyType::NuclearFamily);
    }

    #[test]
    fn test_fixed_sizes() {
        assert_eq!(FamilyType::Single.fixed_size(), Some(1));
        assert_eq!(FamilyType::Couple.fixed_size(), Some(2));
        assert_eq!(FamilyType::NuclearFamily.fixed_size(), None);
        assert_eq!(FamilyType::JointFamily.fixed_size(), None);
    }

    #[test]
    fn test_default_household() {
        let record = HouseholdComposition::default();
        assert_eq!(record.family_type, FamilyType::NuclearFamily);
        assert_eq!(record.total_members, 4);
        assert_eq!(record.children, 1);
        assert_eq!(record.elderly, 0);
    }
}
