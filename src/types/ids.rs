use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static URL_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)",
    )
    .expect("Notion ID regex is valid")
});

/// A Notion object identifier normalised to its dashed UUID form.
///
/// The API accepts IDs with or without dashes; we always send the dashed
/// form so log lines and request paths line up with what the API echoes back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotionId(String);

impl NotionId {
    /// Parses a bare ID (32 hex chars, dashed or not) or a Notion URL.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let cleaned = input.trim().trim_end_matches('/');

        let compact = cleaned.replace('-', "");
        if compact.len() == 32 && compact.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Self::from_hex(&compact));
        }

        if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
            return Self::extract_from_url(cleaned);
        }

        Err(ValidationError::InvalidId(format!(
            "Could not parse Notion ID from: {}",
            input
        )))
    }

    /// Returns the dashed form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 32-character form without dashes.
    pub fn to_compact(&self) -> String {
        self.0.replace('-', "")
    }

    fn from_hex(hex: &str) -> Self {
        let hex = hex.to_lowercase();
        NotionId(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }

    fn extract_from_url(url: &str) -> Result<Self, ValidationError> {
        URL_ID_REGEX
            .captures_iter(url)
            .last()
            .and_then(|captures| captures.get(1))
            .map(|m| Self::from_hex(&m.as_str().replace('-', "")))
            .ok_or_else(|| ValidationError::InvalidId(format!("No valid ID found in URL: {}", url)))
    }
}

impl fmt::Display for NotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NotionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NotionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NotionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NotionId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Checks that an opaque ID can be spliced into a request path as one segment.
///
/// The facade accepts any identifier the API might hand out, so this only
/// rejects what would change the shape of the URL.
pub fn validate_path_segment(id: &str) -> Result<&str, ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyField("id"));
    }
    if id
        .chars()
        .any(|c| c == '/' || c == '?' || c == '#' || c.is_whitespace())
    {
        return Err(ValidationError::InvalidId(format!(
            "'{}' cannot be used as a path segment",
            id
        )));
    }
    Ok(id)
}
