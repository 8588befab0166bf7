//! REST calls against the lead API.
//!
//! Browser builds (`csr` feature): real HTTP via `gloo-net`. Host builds:
//! stubs returning `ApiError::Connection` so state logic stays testable
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, ApiError>`; the server's `error` string
//! is preserved when the body parses, otherwise a per-operation fallback is
//! used. Callers toast the failure and take no further action.

#![allow(clippy::unused_async)]

use super::types::{ApiError, CreatedLead, Lead, LeadPayload};

/// Base URL of the backend API. The UI is served as static files, separate
/// from the Flask process that answers these routes.
pub const API_BASE_URL: &str = "http://localhost:5000/api";

/// Turn a non-OK response into `ApiError::Server`, preferring the body's
/// `error` string over the operation fallback.
#[cfg(feature = "csr")]
async fn server_error(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    match resp.json::<super::types::ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => ApiError::Server(body.error),
        _ => ApiError::Server(fallback.to_owned()),
    }
}

/// Fetch the full lead list from `GET /api/leads`.
///
/// # Errors
///
/// Returns an error when the request fails or the body does not parse.
pub async fn fetch_leads() -> Result<Vec<Lead>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/leads");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if !resp.ok() {
            return Err(server_error(resp, "Failed to load leads").await);
        }
        resp.json::<Vec<Lead>>()
            .await
            .map_err(|_| ApiError::Connection)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Connection)
    }
}

/// Fetch a single lead from `GET /api/leads/:id`.
///
/// # Errors
///
/// Returns an error when the lead is missing or the request fails.
pub async fn fetch_lead(id: i64) -> Result<Lead, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/leads/{id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if !resp.ok() {
            return Err(server_error(resp, "Failed to load lead").await);
        }
        resp.json::<Lead>().await.map_err(|_| ApiError::Connection)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Connection)
    }
}

/// Create a lead via `POST /api/leads`.
///
/// # Errors
///
/// Returns the server's validation message (e.g. a missing required field)
/// or a connection error.
pub async fn create_lead(payload: &LeadPayload) -> Result<CreatedLead, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/leads");
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(|_| ApiError::Connection)?
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if !resp.ok() {
            return Err(server_error(resp, "Failed to generate lead").await);
        }
        resp.json::<CreatedLead>()
            .await
            .map_err(|_| ApiError::Connection)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Connection)
    }
}

/// Update a lead via `PUT /api/leads/:id`.
///
/// # Errors
///
/// Returns the server's message or a connection error.
pub async fn update_lead(id: i64, payload: &LeadPayload) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/leads/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(payload)
            .map_err(|_| ApiError::Connection)?
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if !resp.ok() {
            return Err(server_error(resp, "Failed to update lead").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, payload);
        Err(ApiError::Connection)
    }
}

/// Delete a lead via `DELETE /api/leads/:id`.
///
/// # Errors
///
/// Returns the server's message or a connection error.
pub async fn delete_lead(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/leads/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if !resp.ok() {
            return Err(server_error(resp, "Failed to delete lead").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Connection)
    }
}

/// Download the spreadsheet export from `GET /api/leads/export` as raw bytes.
///
/// # Errors
///
/// Returns an error when the request fails or the body cannot be read.
pub async fn export_leads() -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/leads/export");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if !resp.ok() {
            return Err(server_error(resp, "Failed to export leads").await);
        }
        resp.binary().await.map_err(|_| ApiError::Connection)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Connection)
    }
}

/// Probe `GET /api/health`. Returns `false` on the host or when the backend
/// is unreachable. A reachable backend with an unparseable body still counts
/// as healthy; only the status code decides.
pub async fn check_health() -> bool {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE_URL}/health");
        let Ok(resp) = gloo_net::http::Request::get(&url).send().await else {
            return false;
        };
        if !resp.ok() {
            return false;
        }
        if let Ok(health) = resp.json::<super::types::HealthStatus>().await {
            log::info!("API health: {} ({})", health.status, health.message);
        }
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
