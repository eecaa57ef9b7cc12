//! Scripted executor for unit tests.

use super::types::{ApiRequest, JsonObject};
use super::RequestExecutor;
use crate::error::NotionError;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned results in order and records every request it sees.
pub(crate) struct ScriptedExecutor {
    responses: RefCell<VecDeque<Result<JsonObject, NotionError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedExecutor {
    pub(crate) fn new(responses: Vec<Result<JsonObject, NotionError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl RequestExecutor for ScriptedExecutor {
    fn execute(&self, request: &ApiRequest) -> Result<JsonObject, NotionError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(NotionError::local("script exhausted")))
    }
}

/// A `list` envelope; `has_more` follows from whether a cursor is given.
pub(crate) fn list_page(results: Vec<Value>, next_cursor: Option<&str>) -> JsonObject {
    let value = json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some(),
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}
