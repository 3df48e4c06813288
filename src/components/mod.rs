//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns its widget's state machine and talks to the backend
//! on its own; the only cross-widget wiring is the upload card's success
//! callback handed down from the page shell.

pub mod chat_panel;
pub mod report_card;
pub mod upload_card;
