//! Jurisdictions: the federal government or a specific state.

use serde::{Deserialize, Serialize};

/// Reserved abbreviation selecting the federal jurisdiction.
pub const FEDERAL_ABBREV: &str = "USA";

/// Level of government a jurisdiction belongs to.
///
/// Serialized as the API's single-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JurisdictionLevel {
    #[serde(rename = "f")]
    Federal,
    #[serde(rename = "s")]
    State,
    #[serde(rename = "l")]
    Local,
}

impl JurisdictionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "f",
            Self::State => "s",
            Self::Local => "l",
        }
    }

    /// Level to search for a user-entered abbreviation: the reserved `USA`
    /// token means federal, anything else is looked up as a state.
    pub fn for_abbrev(abbrev: &str) -> Self {
        if abbrev.eq_ignore_ascii_case(FEDERAL_ABBREV) {
            Self::Federal
        } else {
            Self::State
        }
    }
}

/// A governmental scope requests can be narrowed to and filed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub abbrev: String,
    pub level: JurisdictionLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_token_resolves_federal() {
        assert_eq!(JurisdictionLevel::for_abbrev("USA"), JurisdictionLevel::Federal);
        assert_eq!(JurisdictionLevel::for_abbrev("usa"), JurisdictionLevel::Federal);
    }

    #[test]
    fn test_other_abbrevs_resolve_state() {
        for abbrev in ["MA", "IL", "wa", "PR"] {
            assert_eq!(JurisdictionLevel::for_abbrev(abbrev), JurisdictionLevel::State);
        }
    }

    #[test]
    fn test_level_decodes_single_letter() {
        let level: JurisdictionLevel = serde_json::from_str("\"f\"").unwrap();
        assert_eq!(level, JurisdictionLevel::Federal);
        let level: JurisdictionLevel = serde_json::from_str("\"s\"").unwrap();
        assert_eq!(level, JurisdictionLevel::State);
    }
}
