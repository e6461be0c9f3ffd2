//! Service tests for the generator
//!
//! Covers the Gemini HTTP client, retry wrapper and xlsx exporter.

pub mod resilient_generator;
