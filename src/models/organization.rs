//! Organizations and the authenticated account.

use serde::{Deserialize, Serialize};

/// An organization a request can be billed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
}

/// The authenticated user, as returned by the `users/me` endpoint.
///
/// Only the organization memberships matter here; they are resolved to
/// full [`Organization`] records one by one before selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    /// Ids of the organizations this user belongs to.
    #[serde(default)]
    pub organizations: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_org_ids() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "username": "reporter", "organizations": [10, 11]}"#,
        )
        .unwrap();
        assert_eq!(user.organizations, vec![10, 11]);
    }

    #[test]
    fn test_user_without_orgs_decodes_empty() {
        let user: User = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert!(user.organizations.is_empty());
    }
}
