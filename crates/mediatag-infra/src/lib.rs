//! Mediatag Infrastructure Library
//!
//! Shared infrastructure for processes embedding the catalog:
//! - Telemetry initialization
//! - Error response conversion

pub mod error;
pub mod telemetry;

pub use error::ErrorResponse;
pub use telemetry::{init_telemetry, shutdown_telemetry, LogFormat, DEFAULT_FILTER};
