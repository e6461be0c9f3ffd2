//! Shared error types for the title generation system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
