//! Generator core logic: prompt, parsing and retry schedule

pub mod processor;
pub mod prompt;
pub mod retry;

pub use processor::parse_titles;
pub use prompt::build_prompt;
pub use retry::{AttemptState, RetryPolicy};
