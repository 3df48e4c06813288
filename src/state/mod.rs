//! Per-widget client state modules.
//!
//! DESIGN
//! ======
//! Each widget owns one small state machine (`chat`, `uploads`, `report`)
//! with an explicit phase enum instead of a bare busy bool. Mutation goes
//! through named actions so the owning widget stays the single writer and
//! the one-request-in-flight invariant cannot be bypassed by rendering code.

pub mod chat;
pub mod report;
pub mod uploads;
