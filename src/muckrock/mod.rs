//! MuckRock API v2 client.
//!
//! Authenticates once with username/password to obtain a bearer token, then
//! exposes the endpoints the drafting workflow needs: jurisdiction lookup,
//! request search, agency search, account info, and filing.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;
use crate::models::{
    Agency, FoiaRequest, Jurisdiction, JurisdictionLevel, NewFoiaRequest, Organization, User,
};

/// Errors returned by the MuckRock API client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// One page of a list endpoint response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Server-side total across all pages, not just this one.
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access: String,
}

/// Authenticated MuckRock API client.
pub struct MuckRockClient {
    base_url: String,
    token: String,
    client: Client,
}

impl MuckRockClient {
    /// Authenticate with the configured credentials and return a ready client.
    pub async fn connect(settings: &Settings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(Duration::from_secs(settings.request_timeout))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = settings.api_url.as_str().trim_end_matches('/').to_string();

        debug!("Requesting API token for {}", settings.username);
        let resp = client
            .post(format!("{}/token/", base_url))
            .json(&json!({
                "username": settings.username,
                "password": settings.password,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Auth(format!("HTTP {}: {}", status, body)));
        }

        let token: TokenResponse = resp.json().await?;

        Ok(Self {
            base_url,
            token: token.access,
            client,
        })
    }

    /// Build a client around an existing token, skipping the auth round trip.
    pub fn with_token(base_url: &str, token: &str) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        }
    }

    /// Look up jurisdictions by abbreviation at a given level.
    pub async fn list_jurisdictions(
        &self,
        abbrev: &str,
        level: JurisdictionLevel,
    ) -> Result<Vec<Jurisdiction>, ApiError> {
        debug!("Looking up jurisdiction {} at level {}", abbrev, level.as_str());
        let page: Page<Jurisdiction> = self
            .get_json(
                "jurisdictions/",
                &[
                    ("abbrev", abbrev.to_string()),
                    ("level", level.as_str().to_string()),
                ],
            )
            .await?;
        Ok(page.results)
    }

    /// Full-text search over prior requests, optionally narrowed to a jurisdiction.
    ///
    /// Returns the first page; `count` is the server-side total.
    pub async fn search_requests(
        &self,
        topic: &str,
        jurisdiction: Option<i64>,
        page_size: usize,
    ) -> Result<Page<FoiaRequest>, ApiError> {
        debug!("Searching requests for '{}'", topic);
        let mut query = vec![
            ("search", topic.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(id) = jurisdiction {
            query.push(("jurisdiction", id.to_string()));
        }
        self.get_json("requests/", &query).await
    }

    /// Search agencies by name, optionally narrowed to a jurisdiction.
    pub async fn list_agencies(
        &self,
        name: &str,
        jurisdiction: Option<i64>,
    ) -> Result<Vec<Agency>, ApiError> {
        debug!("Searching agencies for '{}'", name);
        let mut query = vec![("name", name.to_string())];
        if let Some(id) = jurisdiction {
            query.push(("jurisdiction", id.to_string()));
        }
        let page: Page<Agency> = self.get_json("agencies/", &query).await?;
        Ok(page.results)
    }

    /// Fetch the authenticated user's account, including organization ids.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("users/me/", &[]).await
    }

    /// Fetch a single organization by id.
    pub async fn get_organization(&self, id: i64) -> Result<Organization, ApiError> {
        self.get_json(&format!("organizations/{}/", id), &[]).await
    }

    /// Submit a new request. The created record is not returned; callers only
    /// need to know the submission was accepted.
    pub async fn create_request(&self, request: &NewFoiaRequest) -> Result<(), ApiError> {
        debug!("Filing request '{}'", request.title);
        let resp = self
            .client
            .post(format!("{}/requests/", self.base_url))
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::Status { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_decode() {
        let json = r#"{
            "count": 2438,
            "next": "https://www.muckrock.com/api_v2/requests/?page=2",
            "previous": null,
            "results": [
                {"id": 1, "title": "Use of force policy", "status": "done"},
                {"id": 2, "title": "Body camera footage", "status": "rejected"}
            ]
        }"#;

        let page: Page<FoiaRequest> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2438);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert!(page.results[0].status.is_successful());
        assert!(!page.results[1].status.is_successful());
    }

    #[test]
    fn test_page_decode_missing_links() {
        let json = r#"{"count": 0, "results": []}"#;
        let page: Page<Jurisdiction> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 0);
        assert!(page.next.is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 403,
            body: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API returned 403: Forbidden");
    }
}
