// src/lib.rs
//! notion-lens library: a blocking, typed client for the Notion REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `NotionError`, `ErrorKind`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `ClientConfig`, `ApiKey`, `CredentialProvider`
//! - **Domain model**: `Page`, `Database`, `Block` and its variants, `Parent`
//! - **API client**: `NotionClient`, `NotionHttpClient`, `RequestExecutor`, `Paginator`

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{ErrorKind, NotionError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::ClientConfig;
pub use crate::types::{ApiKey, CredentialProvider};

// --- Domain Model ---
pub use crate::model::{
    is_known_block_type, parse_block, parse_model, Block, BlockCommon, Database, GenericBlock,
    NotionModel, ObjectMeta, Page, Parent, PartialUser,
};

// --- Domain Types ---
pub use crate::types::{concat_plain_text, Annotations, NotionId, RichTextItem};

// --- API Client ---
pub use crate::api::{
    clamp_page_size, ApiRequest, CursorPlacement, JsonObject, NotionHttpClient, Paginator,
    RequestExecutor,
};
pub use crate::client::{BlockStream, DatabaseQuery, NotionClient, PageStream};
