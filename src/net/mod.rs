//! HTTP boundary to the MedAssist backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `types` defines the wire schema, and
//! `error` is the failure taxonomy widgets map to user-visible outcomes.

pub mod api;
pub mod error;
pub mod types;
