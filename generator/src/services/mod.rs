//! Generator service implementations

pub mod gemini_client;
pub mod resilient_generator;
pub mod xlsx_exporter;

#[cfg(test)]
pub mod tests;

pub use gemini_client::*;
pub use resilient_generator::*;
pub use xlsx_exporter::*;
