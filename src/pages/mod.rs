//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The client has a single screen; `home` owns the layout and the
//! uploaded-file list, delegating everything else to `components`.

pub mod home;
