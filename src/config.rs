// src/config.rs
use crate::constants::{
    API_BASE_URL_ENV_VAR, DEFAULT_API_BASE_URL, DEFAULT_NOTION_VERSION,
    DEFAULT_REQUEST_TIMEOUT_SECS, NOTION_API_PAGE_SIZE, NOTION_VERSION_ENV_VAR,
    REQUEST_TIMEOUT_ENV_VAR,
};
use crate::error::NotionError;
use crate::types::ValidationError;
use clap::{Parser, Subcommand};
use std::time::Duration;
use url::Url;

/// Parsed command-line input for the `notion-lens` binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Integration token (falls back to NOTION_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Retrieve a page
    Page {
        /// Page URL or ID
        id: String,
    },
    /// Retrieve a database
    Database {
        /// Database URL or ID
        id: String,
    },
    /// Retrieve a single block
    Block {
        /// Block URL or ID
        id: String,
    },
    /// Stream every row of a database
    Query {
        /// Database URL or ID
        id: String,
        /// Items per request (1-100)
        #[arg(long, default_value_t = NOTION_API_PAGE_SIZE)]
        page_size: u32,
        /// Filter object as JSON
        #[arg(long)]
        filter: Option<String>,
        /// Sorts array as JSON
        #[arg(long)]
        sorts: Option<String>,
    },
    /// Stream the child blocks of a page or block
    Children {
        /// Parent page/block URL or ID
        id: String,
        /// Items per request (1-100)
        #[arg(long, default_value_t = NOTION_API_PAGE_SIZE)]
        page_size: u32,
    },
}

/// Where and how the transport talks to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub notion_version: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Reads overrides from the environment; anything absent keeps its default.
    pub fn from_env() -> Result<Self, NotionError> {
        let base_url = match std::env::var(API_BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                log::info!("Using API base URL from environment: {}", url);
                url
            }
            _ => DEFAULT_API_BASE_URL.to_string(),
        };

        let notion_version = match std::env::var(NOTION_VERSION_ENV_VAR) {
            Ok(version) if !version.trim().is_empty() => {
                log::info!("Using Notion version from environment: {}", version);
                version
            }
            _ => DEFAULT_NOTION_VERSION.to_string(),
        };

        let timeout_secs = match std::env::var(REQUEST_TIMEOUT_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => {
                    log::info!("Using request timeout from environment: {}s", secs);
                    secs
                }
                Err(_) => {
                    log::warn!(
                        "Invalid {} value '{}'. Using default: {}s",
                        REQUEST_TIMEOUT_ENV_VAR,
                        raw,
                        DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    DEFAULT_REQUEST_TIMEOUT_SECS
                }
            },
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self::default()
            .with_base_url(base_url)?
            .with_notion_version(notion_version)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// Replaces the base URL after checking it is an absolute http(s) URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, NotionError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&trimmed).map_err(|e| {
            NotionError::from(ValidationError::InvalidUrl {
                url: base_url.clone(),
                reason: e.to_string(),
            })
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: base_url,
                reason: "Only HTTP and HTTPS URLs are supported".to_string(),
            }
            .into());
        }

        self.base_url = trimmed;
        Ok(self)
    }

    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unset_all<F: FnOnce()>(f: F) {
        temp_env::with_vars_unset(
            [
                API_BASE_URL_ENV_VAR,
                NOTION_VERSION_ENV_VAR,
                REQUEST_TIMEOUT_ENV_VAR,
            ],
            f,
        );
    }

    #[test]
    fn test_defaults_without_environment() {
        unset_all(|| {
            let config = ClientConfig::from_env().unwrap();
            assert_eq!(config, ClientConfig::default());
            assert_eq!(config.base_url, "https://api.notion.com");
            assert_eq!(config.notion_version, "2022-06-28");
            assert_eq!(config.timeout, Duration::from_secs(60));
        });
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                (API_BASE_URL_ENV_VAR, Some("http://localhost:8080/")),
                (NOTION_VERSION_ENV_VAR, Some("2025-09-03")),
                (REQUEST_TIMEOUT_ENV_VAR, Some("5")),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:8080");
                assert_eq!(config.notion_version, "2025-09-03");
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        temp_env::with_vars(
            [
                (API_BASE_URL_ENV_VAR, None),
                (NOTION_VERSION_ENV_VAR, None),
                (REQUEST_TIMEOUT_ENV_VAR, Some("soon")),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert_eq!(config.timeout, Duration::from_secs(60));
            },
        );
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClientConfig::default()
            .with_base_url("ftp://example.com")
            .unwrap_err();
        assert!(err.is_validation_failure());
        assert!(ClientConfig::default().with_base_url("not a url").is_err());
    }
}
