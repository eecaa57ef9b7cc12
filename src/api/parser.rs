// src/api/parser.rs
//! Turns raw responses into JSON objects, typed errors and domain models.
//!
//! The transport hands every response here. Failure statuses become
//! [`NotionError::Api`]; success bodies become a [`JsonObject`] that the
//! model layer validates next.

use super::client::ApiResponse;
use super::types::{JsonObject, NotionApiErrorResponse, PaginatedResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{NotionError, NotionErrorCode};
use crate::model::{parse_block, parse_model, Block, Database, NotionModel, Page};
use crate::types::ValidationError;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Classify a raw response: an API rejection, an empty success, or a JSON object.
pub fn classify_response(result: ApiResponse<String>) -> Result<JsonObject, NotionError> {
    if !result.status.is_success() {
        return Err(parse_error_response(&result.data, result.status, &result.url));
    }

    if result.status == StatusCode::NO_CONTENT || result.data.trim().is_empty() {
        return Ok(JsonObject::new());
    }

    match serde_json::from_str::<Value>(&result.data) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(NotionError::local(format!(
            "Expected a JSON object from {}, got {}",
            result.url,
            json_kind(&other)
        ))),
        Err(e) => {
            log::error!("Failed to parse response from {}: {}", result.url, e);
            Err(NotionError::local(format!(
                "Failed to decode JSON response from {} (status {}): {}",
                result.url,
                result.status.as_u16(),
                e
            )))
        }
    }
}

/// Builds the rejection for a non-2xx response.
///
/// Bodies without a string `code` and `message` are reported as
/// `unknown_error_format` with a preview of the raw text.
fn parse_error_response(body: &str, status: StatusCode, url: &str) -> NotionError {
    let error = match serde_json::from_str::<NotionApiErrorResponse>(body) {
        Ok(api_error) => NotionError::Api {
            status: status.as_u16(),
            code: NotionErrorCode::from_api_response(&api_error.code),
            message: api_error.message,
            request_id: api_error.request_id,
        },
        Err(_) => NotionError::Api {
            status: status.as_u16(),
            code: NotionErrorCode::UnknownErrorFormat,
            message: body_preview(body),
            request_id: None,
        },
    };
    log::error!("Request to {} rejected: {}", url, error);
    error
}

fn body_preview(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "Unknown error structure.".to_string();
    }
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        format!(
            "{}...",
            body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect::<String>()
        )
    } else {
        body.to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validates a single top-level object and labels failures with its kind and id.
fn parse_object<T: NotionModel>(data: JsonObject, id: &str) -> Result<T, NotionError> {
    let value = Value::Object(data);
    parse_model::<T>(&value).map_err(|e| {
        let context = format!("Failed to parse {} response (ID: {})", T::NAME, id);
        NotionError::from(e).with_context(context)
    })
}

/// Parse page response
pub fn parse_page_response(data: JsonObject, id: &str) -> Result<Page, NotionError> {
    parse_object(data, id)
}

/// Parse database response
pub fn parse_database_response(data: JsonObject, id: &str) -> Result<Database, NotionError> {
    parse_object(data, id)
}

/// Parse block response through the block factory.
pub fn parse_block_response(data: JsonObject, id: &str) -> Result<Block, NotionError> {
    parse_block(&Value::Object(data)).map_err(|e| {
        NotionError::from(e).with_context(format!("Failed to parse Block response (ID: {})", id))
    })
}

/// Validates a `list` envelope. A bad envelope invalidates the whole walk.
pub fn parse_list_envelope(data: JsonObject) -> Result<PaginatedResponse, NotionError> {
    let tag = data.get("object").and_then(Value::as_str).unwrap_or_default();
    if tag != "list" {
        return Err(ValidationError::ObjectMismatch {
            expected: "list",
            found: tag.to_string(),
        }
        .into());
    }

    PaginatedResponse::deserialize(Value::Object(data)).map_err(|e| {
        NotionError::from(ValidationError::Schema(e)).with_context("Invalid list response")
    })
}

/// Item parser for database query results.
pub fn parse_page_item(value: &Value) -> Result<Page, NotionError> {
    parse_model::<Page>(value).map_err(NotionError::from)
}

/// Item parser for block children.
pub fn parse_block_item(value: &Value) -> Result<Block, NotionError> {
    parse_block(value).map_err(NotionError::from)
}
