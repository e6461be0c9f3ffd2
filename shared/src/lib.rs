//! Shared types for the SearchBoost title generator
//!
//! Contains the request model, provider failure taxonomy and logging setup
//! used by both the generator library and the webserver.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use logging::Component;
pub use types::*;
