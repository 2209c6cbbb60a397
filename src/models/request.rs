//! Request records as returned by the MuckRock search API.
//!
//! Records are immutable snapshots; the pipeline only reads, filters,
//! and embeds them into the generation prompt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a filed request.
///
/// Mirrors the status vocabulary of the MuckRock API. Unrecognized wire
/// values decode to `Other` so new statuses never break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Started,
    Submitted,
    Ack,
    Processed,
    Appealing,
    Fix,
    Payment,
    Lawsuit,
    Rejected,
    NoDocs,
    Done,
    Partial,
    Abandoned,
    #[serde(other)]
    Other,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Submitted => "submitted",
            Self::Ack => "ack",
            Self::Processed => "processed",
            Self::Appealing => "appealing",
            Self::Fix => "fix",
            Self::Payment => "payment",
            Self::Lawsuit => "lawsuit",
            Self::Rejected => "rejected",
            Self::NoDocs => "no_docs",
            Self::Done => "done",
            Self::Partial => "partial",
            Self::Abandoned => "abandoned",
            Self::Other => "other",
        }
    }

    /// Whether this status means records were obtained, fully or partially.
    ///
    /// Every status maps to exactly one side of this predicate; `Done` and
    /// `Partial` are the only successful outcomes.
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Done | Self::Partial)
    }
}

/// A prior FOIA request fetched from the search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoiaRequest {
    /// MuckRock's numeric identifier.
    pub id: i64,
    /// Request title.
    pub title: String,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Free-text body describing the records sought. Absent or empty for
    /// some older records.
    #[serde(default)]
    pub requested_docs: Option<String>,
    /// When the request was submitted, if known.
    #[serde(default)]
    pub datetime_submitted: Option<DateTime<Utc>>,
}

impl FoiaRequest {
    /// Body text for prompt embedding, or None when blank.
    pub fn body_text(&self) -> Option<&str> {
        self.requested_docs
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Payload for filing a new request.
///
/// Built immediately before submission and not retained afterward. The
/// agency list always holds exactly one id in this tool.
#[derive(Debug, Clone, Serialize)]
pub struct NewFoiaRequest {
    pub title: String,
    pub requested_docs: String,
    pub organization: i64,
    pub agencies: Vec<i64>,
}

impl NewFoiaRequest {
    pub fn new(title: String, requested_docs: String, organization: i64, agency: i64) -> Self {
        Self {
            title,
            requested_docs,
            organization,
            agencies: vec![agency],
        }
    }
}
