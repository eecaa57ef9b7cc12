// src/api/types.rs
//! Type definitions for the Notion API module.

use reqwest::Method;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A decoded JSON object, as every successful call yields.
pub type JsonObject = serde_json::Map<String, Value>;

// --- Request Types ---

/// One logical API call: method, path under the base URL, query pairs and
/// an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/v1/pages/{id}`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// `METHOD /path`, for logs and error context.
    pub fn describe(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

// --- Response Types ---

/// The `list` envelope every paginated endpoint returns.
///
/// Items stay raw so each one can be validated on its own. A missing or
/// null `results` is an empty page, and a missing or null `has_more` is
/// the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse {
    pub object: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Value>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The structured error body: `{"object": "error", "status", "code", "message"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionApiErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

// --- Pagination Types ---

/// Where the cursor and page size travel on a paginated endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPlacement {
    /// As query parameters (GET endpoints).
    Query,
    /// Inside the JSON body (POST endpoints).
    Body,
}

/// Progress of one pagination walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationState {
    /// No page requested yet.
    Start,
    /// More pages follow; the next request carries this cursor.
    Next(String),
    /// The walk is over, normally or after an error.
    Done,
}
