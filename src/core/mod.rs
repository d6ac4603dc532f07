//! Core infrastructure
//!
//! Logging macros and the shared-state abstraction used by the acquisition
//! subsystem.

pub mod logging;
pub mod traits;
