// src/types/domain_types.rs
//! Credential newtype and the provider seam the transport pulls headers from.

use super::ValidationError;
use crate::constants::API_TOKEN_ENV_VAR;
use std::fmt;

/// Token prefixes Notion has issued over time. Only used to warn.
const KNOWN_TOKEN_PREFIXES: [&str; 2] = ["secret_", "ntn_"];

/// Notion integration token.
///
/// Resolved once when a client is built and never printed: both `Debug`
/// and `Display` redact it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps an explicit token.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if !KNOWN_TOKEN_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        {
            log::warn!(
                "API key does not start with any known prefix ({}); sending it anyway",
                KNOWN_TOKEN_PREFIXES.join(", ")
            );
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Resolves the token: an explicit value wins, then `NOTION_API_TOKEN`.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ValidationError> {
        if let Some(token) = explicit.filter(|t| !t.trim().is_empty()) {
            log::debug!("Using explicitly provided API token");
            return Self::new(token);
        }

        match std::env::var(API_TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => {
                log::debug!("Using API token from {}", API_TOKEN_ENV_VAR);
                Self::new(token)
            }
            _ => Err(ValidationError::InvalidApiKey {
                reason: format!(
                    "no token provided; pass one explicitly or set {}",
                    API_TOKEN_ENV_VAR
                ),
            }),
        }
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<redacted>")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

/// Source of the `Authorization` header value.
///
/// The transport asks on every request instead of caching the header, so an
/// implementation is free to rotate or refresh its token.
pub trait CredentialProvider: Send + Sync {
    fn authorization(&self) -> String;
}

impl CredentialProvider for ApiKey {
    fn authorization(&self) -> String {
        format!("Bearer {}", self.0)
    }
}
