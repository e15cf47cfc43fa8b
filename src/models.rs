use crate::countdown::Tier;
use serde::{Deserialize, Serialize};

/// One submission-history row: one problem, one identity, one outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    pub problem_id: String,
    pub problem_name: String,
    pub passed: bool,
    /// Epoch milliseconds, `None` when the row carried no parsable time.
    pub timestamp: Option<i64>,
    pub status_text: String,
    pub url: String,
    pub submit_time_label: String,
}

/// The most recent attempt for a problem that has no passing attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub problem_id: String,
    pub problem_name: String,
    pub status_text: String,
    pub url: String,
    pub submit_time_label: String,
    pub timestamp: Option<i64>,
}

impl From<Attempt> for FailureRecord {
    fn from(attempt: Attempt) -> Self {
        Self {
            problem_id: attempt.problem_id,
            problem_name: attempt.problem_name,
            status_text: attempt.status_text,
            url: attempt.url,
            submit_time_label: attempt.submit_time_label,
            timestamp: attempt.timestamp,
        }
    }
}

/// A countdown target. Fixed events come from the remote list and are not
/// editable; custom events are user-created and deletable by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub is_fixed: bool,
}

/// Shape of one entry in the remote fixed-event JSON list.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEvent {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub remark: Option<String>,
}

/// One status cell from a contest problems page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDot {
    pub passed: bool,
    pub score: String,
    pub status: String,
}

/// Durable local state, stored as one JSON blob and rewritten wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoredData {
    #[serde(default)]
    pub custom_events: Vec<Event>,
    #[serde(default)]
    pub failed_cache: Vec<FailureRecord>,
}

#[derive(Debug, Deserialize)]
pub struct AddEventRequest {
    pub name: String,
    pub date: String,
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountdownEntry {
    pub id: String,
    pub name: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub is_fixed: bool,
    pub days_remaining: i64,
    pub is_past: bool,
    pub tier: Tier,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub events: Vec<CountdownEntry>,
    /// Reason the remote fixed-event list could not be loaded; custom
    /// events are still present when this is set.
    #[serde(default)]
    pub fixed_error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FailedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ContestStatusRequest {
    pub links: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContestStatusEntry {
    pub link: String,
    pub dots: Vec<ProblemDot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContestStatusResponse {
    pub contests: Vec<ContestStatusEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub cleared: usize,
}
