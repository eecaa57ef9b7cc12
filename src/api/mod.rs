// src/api/mod.rs
//! Notion API interaction.
//!
//! Transport, response classification and pagination. Business logic
//! depends on [`RequestExecutor`], never on HTTP details.

pub mod client;
pub mod pagination;
pub mod parser;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{ApiResponse, NotionHttpClient};
pub use pagination::{clamp_page_size, ItemParser, Paginator};
pub use types::{
    ApiRequest, CursorPlacement, JsonObject, NotionApiErrorResponse, PaginatedResponse,
    PaginationState,
};

use crate::error::NotionError;

/// The ability to perform one API call.
///
/// Implementations return the decoded JSON object of a successful response
/// or a typed error. They never validate the payload.
pub trait RequestExecutor {
    fn execute(&self, request: &ApiRequest) -> Result<JsonObject, NotionError>;
}

impl<E: RequestExecutor + ?Sized> RequestExecutor for &E {
    fn execute(&self, request: &ApiRequest) -> Result<JsonObject, NotionError> {
        (**self).execute(request)
    }
}
