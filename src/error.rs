// src/error.rs
//! Error types for the client.
//!
//! Every failure a caller can observe is one of three kinds: the call never
//! completed (transport), the API said no (rejection), or the client could
//! not make sense of what it sent or received (local). Callers branch on
//! [`NotionError::kind`] and never need to inspect messages.

use crate::types::ValidationError;
use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"rate_limited"`, the
/// codes the API documents are variants. `UnknownErrorFormat` is ours: the
/// error body was not the structured `{code, message}` shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// The error body could not be decoded into `{code, message}`
    UnknownErrorFormat,
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            "unknown_error_format" => Self::UnknownErrorFormat,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The code as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::RateLimited => "rate_limited",
            Self::ObjectNotFound => "object_not_found",
            Self::Unauthorized => "unauthorized",
            Self::RestrictedResource => "restricted_resource",
            Self::InvalidJson => "invalid_json",
            Self::ValidationFailed => "validation_error",
            Self::Conflict => "conflict_error",
            Self::InternalError => "internal_server_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::UnknownErrorFormat => "unknown_error_format",
            Self::Unknown(code) => code,
        }
    }

    /// Whether this error is transient. Informational only: nothing in this
    /// crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound)
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a [`NotionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The HTTP exchange did not complete.
    Transport,
    /// The API answered with a non-2xx status.
    ApiRejection,
    /// Transport succeeded but the client could not finish the job.
    LocalFailure,
}

/// The single error type every public operation returns.
#[derive(Error, Debug)]
pub enum NotionError {
    #[error("Network failure during {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Notion API returned an error ({status} - {code}): {message}")]
    Api {
        status: u16,
        code: NotionErrorCode,
        message: String,
        request_id: Option<String>,
    },

    #[error("{message}")]
    Local {
        message: String,
        #[source]
        source: Option<ValidationError>,
    },
}

impl NotionError {
    /// A local failure with no underlying validation cause.
    pub fn local(message: impl Into<String>) -> Self {
        Self::Local {
            message: message.into(),
            source: None,
        }
    }

    /// A local failure wrapping the validation error that caused it.
    pub fn invalid(message: impl Into<String>, source: ValidationError) -> Self {
        Self::Local {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn transport(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::ApiRejection,
            Self::Local { .. } => ErrorKind::LocalFailure,
        }
    }

    /// True for local failures caused by a payload that did not validate.
    ///
    /// This is the only class of error a list walk may skip per item.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::Local { source: Some(_), .. })
    }

    /// The HTTP status for API rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The remote error code for API rejections.
    pub fn error_code(&self) -> Option<&NotionErrorCode> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Re-labels a validation failure with caller context, keeping the cause.
    /// Transport and API errors pass through untouched.
    pub(crate) fn with_context(self, context: impl fmt::Display) -> Self {
        match self {
            Self::Local { message, source } => Self::Local {
                message: format!("{}: {}", context, message),
                source,
            },
            other => other,
        }
    }
}

impl From<ValidationError> for NotionError {
    fn from(err: ValidationError) -> Self {
        Self::invalid(err.to_string(), err)
    }
}

/// Result type alias for convenience
pub type Result<T, E = NotionError> = std::result::Result<T, E>;
