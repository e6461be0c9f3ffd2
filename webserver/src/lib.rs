//! Webserver library for the SearchBoost title generator
//!
//! Serves the title form, runs generation cycles on request and streams the
//! resulting list back as JSON or as an Excel download.

pub mod error;
pub mod state;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;
