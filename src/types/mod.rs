use thiserror::Error;

mod domain_types;
mod ids;
mod rich_text;

pub use domain_types::*;
pub use ids::*;
pub use rich_text::*;

/// Why a payload or an input value was refused on the client side.
///
/// These never leave the crate on their own: they ride inside
/// [`NotionError::Local`](crate::error::NotionError::Local) so callers can
/// still see the field-level cause.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Schema mismatch: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Expected object '{expected}', found '{found}'")]
    ObjectMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid API key: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },
}
