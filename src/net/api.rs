//! REST calls to the MedAssist backend.
//!
//! Browser build (csr): real HTTP calls via `gloo-net`.
//! Native build (tests): request functions are stubbed since they are only
//! meaningful in the browser; the URL helpers stay pure and testable.
//!
//! ERROR HANDLING
//! ==============
//! Callers get an [`ApiError`] instead of panics so widgets can absorb every
//! failure at the call site; nothing here retries or logs.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::QueryResponse;
#[cfg(feature = "csr")]
use super::types::{GenerateReportRequest, GenerateReportResponse, QueryRequest};

/// Backend origin, fixed at compile time. Set `MEDASSIST_API_URL` when
/// building to point at something other than the local development default.
pub fn api_base() -> &'static str {
    option_env!("MEDASSIST_API_URL").unwrap_or("http://localhost:8000")
}

#[cfg(any(test, feature = "csr"))]
fn query_url() -> String {
    format!("{}/api/query", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn upload_url() -> String {
    format!("{}/api/upload", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn generate_report_url() -> String {
    format!("{}/api/report/generate_report", api_base())
}

/// URL the generated report is retrieved from. `filename` is used exactly
/// as the server returned it.
pub fn download_report_url(filename: &str) -> String {
    format!("{}/api/report/download/{filename}", api_base())
}

/// Ask a question via `POST /api/query`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server responds with
/// a non-success status, or the body cannot be decoded.
pub async fn ask(question: &str) -> Result<QueryResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = QueryRequest {
            question: question.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&query_url())
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<QueryResponse>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = question;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Upload one document via `POST /api/upload` as a multipart form with the
/// single field `file`. Success is determined solely by the status code; the
/// response body is not read.
///
/// # Errors
///
/// Returns an [`ApiError`] when the form cannot be built, the request fails,
/// or the server responds with a non-success status.
#[cfg(feature = "csr")]
pub async fn upload(file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;

    let resp = gloo_net::http::Request::post(&upload_url())
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// Request report generation via `POST /api/report/generate_report`,
/// returning the server-chosen filename of the generated file.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server responds with
/// a non-success status, or the body cannot be decoded.
pub async fn generate_report(sections: Vec<String>) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = GenerateReportRequest { sections };
        let resp = gloo_net::http::Request::post(&generate_report_url())
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let parsed: GenerateReportResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(parsed.filename)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = sections;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
