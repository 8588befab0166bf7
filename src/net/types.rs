#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A lead record as returned by the backend.
///
/// `id` is server-assigned and immutable; everything else is mutable via
/// update. Optional columns may come back as `null` or be missing entirely,
/// so they default to `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    pub lead_source: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Free-form on the wire; the UI offers New/Contacted/Qualified/
    /// Converted/Lost and the stats only count the first three named.
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Outbound body for `POST /api/leads` and `PUT /api/leads/:id`.
///
/// `created_at` is client-generated and attached on create only; the
/// backend owns `updated_at`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
    pub industry: String,
    pub lead_source: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub notes: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Acknowledgement for a successful create.
#[derive(Clone, Debug, Deserialize)]
pub struct CreatedLead {
    pub id: i64,
    #[serde(default)]
    pub message: String,
}

/// Error payload the backend attaches to 4xx/5xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

/// Response of the `GET /api/health` liveness probe.
#[derive(Clone, Debug, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Every request failure collapses to one of two kinds: the server reported
/// an error, or the request never produced a usable response. Nothing is
/// retried; callers surface a toast and move on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server-reported message (from the JSON `error` body, or a
    /// per-operation fallback when the body is unusable).
    #[error("{0}")]
    Server(String),
    /// Network or parse failure.
    #[error("connection error")]
    Connection,
}
