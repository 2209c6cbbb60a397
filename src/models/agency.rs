//! Agencies: government bodies that receive records requests.

use serde::{Deserialize, Serialize};

/// Review status of an agency in the clearinghouse directory.
///
/// Only `approved` agencies can be targeted by a new request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgencyStatus {
    Approved,
    Pending,
    Rejected,
    #[serde(other)]
    Other,
}

impl AgencyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::Other => "other",
        }
    }
}

/// A government body capable of receiving and fulfilling a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    pub status: AgencyStatus,
    /// Jurisdiction the agency belongs to, when the API includes it.
    #[serde(default)]
    pub jurisdiction: Option<i64>,
}

impl Agency {
    pub fn is_approved(&self) -> bool {
        self.status == AgencyStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_approved_is_approved() {
        let mut agency: Agency = serde_json::from_str(
            r#"{"id": 5, "name": "State Police", "status": "approved"}"#,
        )
        .unwrap();
        assert!(agency.is_approved());

        agency.status = AgencyStatus::Pending;
        assert!(!agency.is_approved());
        agency.status = AgencyStatus::Rejected;
        assert!(!agency.is_approved());
        agency.status = AgencyStatus::Other;
        assert!(!agency.is_approved());
    }

    #[test]
    fn test_unknown_status_decodes_to_other() {
        let agency: Agency =
            serde_json::from_str(r#"{"id": 9, "name": "X", "status": "defunct"}"#).unwrap();
        assert_eq!(agency.status, AgencyStatus::Other);
    }
}
