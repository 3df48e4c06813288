//! Request/response DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Shapes mirror the backend contract exactly so serde round-trips stay
//! lossless; anything the client derives from them (source lists, download
//! URLs) is computed elsewhere from the raw payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// Successful response of `POST /api/query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Answer text produced by the retrieval backend.
    pub answer: String,
    /// Comma-delimited source document names; absent when the backend cited
    /// no documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
}

/// Body of `POST /api/report/generate_report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportRequest {
    /// Section names to include, in display order. May be empty.
    pub sections: Vec<String>,
}

/// Successful response of `POST /api/report/generate_report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateReportResponse {
    /// Server-chosen name of the generated file, URL-safe as returned.
    pub filename: String,
}
