// src/api/client.rs
//! Blocking HTTP transport for the Notion API.
//!
//! This module is a thin wrapper around reqwest. It builds the URL, attaches
//! headers and hands the raw response to the parser; it knows nothing about
//! pages, databases or blocks.

use super::parser::classify_response;
use super::types::{ApiRequest, JsonObject};
use super::RequestExecutor;
use crate::config::ClientConfig;
use crate::constants::NOTION_VERSION_HEADER;
use crate::error::NotionError;
use crate::types::CredentialProvider;
use reqwest::blocking::Client;
use reqwest::{header, StatusCode};
use std::sync::Arc;

/// A thin wrapper around the blocking reqwest Client for Notion API requests.
///
/// Static headers are set once on the underlying client. The
/// `Authorization` header is fetched from the credential provider on every
/// request.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    config: ClientConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl NotionHttpClient {
    /// Creates a new HTTP client for the given configuration.
    pub fn new(
        credentials: impl CredentialProvider + 'static,
        config: ClientConfig,
    ) -> Result<Self, NotionError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&config)?)
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotionError::local(format!("Failed to build HTTP client: {}", e)))?;

        log::debug!(
            "HTTP client ready: base_url={}, {}={}, timeout={}s",
            config.base_url,
            NOTION_VERSION_HEADER,
            config.notion_version,
            config.timeout.as_secs()
        );

        Ok(Self {
            client,
            config,
            credentials: Arc::new(credentials),
        })
    }

    /// Creates the static headers for Notion API requests.
    fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap, NotionError> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            NOTION_VERSION_HEADER,
            header::HeaderValue::from_str(&config.notion_version).map_err(|e| {
                NotionError::local(format!(
                    "Invalid Notion version '{}': {}",
                    config.notion_version, e
                ))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the per-request auth header. The value is marked sensitive so
    /// reqwest keeps it out of its own debug output.
    fn authorization(&self) -> Result<header::HeaderValue, NotionError> {
        let mut value = header::HeaderValue::from_str(&self.credentials.authorization())
            .map_err(|_| NotionError::local("Invalid API token format"))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Sends one request and returns the raw body with its status.
    pub fn send(&self, request: &ApiRequest) -> Result<ApiResponse<String>, NotionError> {
        if !request.path.starts_with('/') {
            return Err(NotionError::local(format!(
                "Request path must start with '/': {}",
                request.path
            )));
        }

        let url = format!("{}{}", self.config.base_url, request.path);
        log::debug!("{} {} query={:?}", request.method, url, request.query);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(header::AUTHORIZATION, self.authorization()?);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            log::debug!("   Request body: {}", body);
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| NotionError::transport(request.describe(), e))?;

        extract_response_text(response)
            .map_err(|e| NotionError::transport(request.describe(), e))
    }
}

impl RequestExecutor for NotionHttpClient {
    fn execute(&self, request: &ApiRequest) -> Result<JsonObject, NotionError> {
        let response = self.send(request)?;
        log::debug!("{} -> {}", request.describe(), response.status);
        classify_response(response)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
fn extract_response_text(
    response: reqwest::blocking::Response,
) -> Result<ApiResponse<String>, reqwest::Error> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text()?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
