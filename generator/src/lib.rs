//! Blog title generator library
//!
//! Builds an SEO title prompt from user input, sends it to Gemini with
//! randomized exponential backoff, and parses the reply into a clean,
//! ordered title list that can be exported to Excel.

pub mod config;
pub mod core;
pub mod error;
pub mod generator_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::GeneratorConfig;
pub use crate::core::{build_prompt, parse_titles, AttemptState, RetryPolicy};
pub use error::{GeneratorError, GeneratorResult};
pub use generator_impl::TitleGenerator;
pub use services::*;
pub use traits::*;
pub use types::*;
