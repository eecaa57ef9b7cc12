// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the concept it constrains. Reading these
//! should tell you where the client talks to, which protocol version it
//! speaks, and how much it asks for per round-trip.

// ---------------------------------------------------------------------------
// Notion API endpoint and protocol
// ---------------------------------------------------------------------------

/// Base URL of the public Notion API. Paths such as `/v1/pages/{id}` are
/// appended verbatim.
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com";

/// Value sent in the `Notion-Version` header unless overridden.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Per-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Name of the protocol-version header.
pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the integration token.
pub const API_TOKEN_ENV_VAR: &str = "NOTION_API_TOKEN";

/// Environment variable overriding [`DEFAULT_API_BASE_URL`].
pub const API_BASE_URL_ENV_VAR: &str = "NOTION_API_URL";

/// Environment variable overriding [`DEFAULT_NOTION_VERSION`].
pub const NOTION_VERSION_ENV_VAR: &str = "NOTION_VERSION";

/// Environment variable overriding [`DEFAULT_REQUEST_TIMEOUT_SECS`].
pub const REQUEST_TIMEOUT_ENV_VAR: &str = "NOTION_REQUEST_TIMEOUT";

// ---------------------------------------------------------------------------
// Pagination boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results at most.
///
/// Also the value used when a caller asks for something out of range.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Smallest page size the API accepts.
pub const NOTION_API_MIN_PAGE_SIZE: u32 = 1;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters kept when quoting an unparseable error body.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// Maximum characters of a title shown in `Display` renderings.
pub const TITLE_PREVIEW_LENGTH: usize = 30;
