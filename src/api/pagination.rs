// src/api/pagination.rs
//! Lazy cursor pagination.
//!
//! A [`Paginator`] fetches one page per round-trip, and only when the
//! consumer has drained the previous page. Items that fail validation are
//! logged and skipped; anything else ends the walk.

use super::parser::parse_list_envelope;
use super::types::{ApiRequest, CursorPlacement, PaginatedResponse, PaginationState};
use super::RequestExecutor;
use crate::constants::{NOTION_API_MIN_PAGE_SIZE, NOTION_API_PAGE_SIZE};
use crate::error::NotionError;
use serde_json::{json, Value};
use std::iter::FusedIterator;

/// Parses one raw list item.
pub type ItemParser<T> = fn(&Value) -> Result<T, NotionError>;

/// Brings a requested page size into `[1, 100]`. Out-of-range values become 100.
pub fn clamp_page_size(requested: u32) -> u32 {
    if (NOTION_API_MIN_PAGE_SIZE..=NOTION_API_PAGE_SIZE).contains(&requested) {
        requested
    } else {
        log::debug!(
            "Page size {} out of range, using {}",
            requested,
            NOTION_API_PAGE_SIZE
        );
        NOTION_API_PAGE_SIZE
    }
}

/// A single-use, in-order walk over a paginated endpoint.
///
/// Not restartable: once it returns `None` it keeps returning `None`.
pub struct Paginator<'a, E: RequestExecutor + ?Sized, T> {
    executor: &'a E,
    request: ApiRequest,
    placement: CursorPlacement,
    page_size: u32,
    parse_item: ItemParser<T>,
    label: String,
    state: PaginationState,
    buffer: std::vec::IntoIter<Value>,
    pages_fetched: u32,
}

impl<'a, E: RequestExecutor + ?Sized, T> Paginator<'a, E, T> {
    /// Prepares a walk; nothing is sent until the first item is pulled.
    ///
    /// `request` carries the static part of every call. `page_size` is
    /// clamped, and the cursor travels wherever `placement` says.
    pub fn new(
        executor: &'a E,
        request: ApiRequest,
        placement: CursorPlacement,
        page_size: u32,
        parse_item: ItemParser<T>,
    ) -> Self {
        let label = request.describe();
        Self {
            executor,
            request,
            placement,
            page_size: clamp_page_size(page_size),
            parse_item,
            label,
            state: PaginationState::Start,
            buffer: Vec::new().into_iter(),
            pages_fetched: 0,
        }
    }

    /// Number of pages requested so far.
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// The page size actually sent.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn page_request(&self, cursor: Option<&str>) -> ApiRequest {
        let mut request = self.request.clone();
        match self.placement {
            CursorPlacement::Query => {
                request = request.with_query("page_size", self.page_size.to_string());
                if let Some(cursor) = cursor {
                    request = request.with_query("start_cursor", cursor);
                }
            }
            CursorPlacement::Body => {
                let mut body = match request.body.take() {
                    Some(Value::Object(map)) => map,
                    _ => serde_json::Map::new(),
                };
                body.insert("page_size".to_string(), json!(self.page_size));
                if let Some(cursor) = cursor {
                    body.insert("start_cursor".to_string(), json!(cursor));
                }
                request = request.with_body(Value::Object(body));
            }
        }
        request
    }

    fn fetch_page(&mut self, cursor: Option<String>) -> Result<PaginatedResponse, NotionError> {
        let request = self.page_request(cursor.as_deref());
        let data = self.executor.execute(&request)?;
        let page = parse_list_envelope(data)?;
        self.pages_fetched += 1;

        log::debug!(
            "{}: page {} with {} items (has_more: {})",
            self.label,
            self.pages_fetched,
            page.results.len(),
            page.has_more
        );

        self.state = match (page.has_more, &page.next_cursor) {
            (true, Some(next)) => PaginationState::Next(next.clone()),
            (true, None) => {
                log::warn!(
                    "{} reported more results without a cursor; stopping",
                    self.label
                );
                PaginationState::Done
            }
            (false, _) => PaginationState::Done,
        };
        Ok(page)
    }

    fn finish(&mut self) {
        self.state = PaginationState::Done;
        self.buffer = Vec::new().into_iter();
    }
}

impl<E: RequestExecutor + ?Sized, T> Iterator for Paginator<'_, E, T> {
    type Item = Result<T, NotionError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(raw) = self.buffer.next() {
                match (self.parse_item)(&raw) {
                    Ok(item) => return Some(Ok(item)),
                    Err(e) if e.is_validation_failure() => {
                        log::warn!(
                            "Skipping item ID '{}' in {} due to validation error: {}",
                            raw.get("id").and_then(Value::as_str).unwrap_or("<unknown>"),
                            self.label,
                            e
                        );
                        continue;
                    }
                    Err(e) => {
                        self.finish();
                        return Some(Err(e));
                    }
                }
            }

            let cursor = match &self.state {
                PaginationState::Done => return None,
                PaginationState::Start => None,
                PaginationState::Next(cursor) => Some(cursor.clone()),
            };

            match self.fetch_page(cursor) {
                Ok(page) => self.buffer = page.results.into_iter(),
                Err(e) => {
                    self.finish();
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<E: RequestExecutor + ?Sized, T> FusedIterator for Paginator<'_, E, T> {}
