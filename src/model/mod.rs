mod block;
mod block_factory;
pub mod blocks;
mod common;
mod database;
mod page;

pub use block::Block;
pub use block_factory::{is_known_block_type, parse_block};
pub use blocks::*;
pub use common::BlockCommon;
pub use database::Database;
pub use page::Page;

use crate::types::ValidationError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A top-level Notion object that can be parsed straight from a response.
pub trait NotionModel: DeserializeOwned {
    /// Literal the `object` field must carry.
    const OBJECT: &'static str;
    /// Human-readable model name used in diagnostics.
    const NAME: &'static str;
}

/// Fields every page, database and block shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub id: String,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub in_trash: bool,
    pub parent: Parent,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created_by: Option<PartialUser>,
    #[serde(default)]
    pub last_edited_by: Option<PartialUser>,
}

/// The user reference embedded in `created_by` / `last_edited_by`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUser {
    pub id: String,
}

/// Where an object lives.
///
/// Parent kinds the API adds later are kept as `Other` with their raw
/// payload instead of failing the whole object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Parent {
    Page { page_id: String },
    Database { database_id: String },
    Block { block_id: String },
    Workspace,
    Other { parent_type: String, raw: Value },
}

impl Parent {
    pub fn parent_type(&self) -> &str {
        match self {
            Parent::Page { .. } => "page_id",
            Parent::Database { .. } => "database_id",
            Parent::Block { .. } => "block_id",
            Parent::Workspace => "workspace",
            Parent::Other { parent_type, .. } => parent_type,
        }
    }

    /// The referenced ID, if the parent is another object.
    pub fn id(&self) -> Option<&str> {
        match self {
            Parent::Page { page_id } => Some(page_id),
            Parent::Database { database_id } => Some(database_id),
            Parent::Block { block_id } => Some(block_id),
            Parent::Workspace | Parent::Other { .. } => None,
        }
    }
}

impl TryFrom<Value> for Parent {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let parent_type = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| "parent is missing its 'type' tag".to_string())?
            .to_string();

        let id_field = |key: &str| -> Result<String, String> {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| format!("parent of type '{}' is missing '{}'", parent_type, key))
        };

        match parent_type.as_str() {
            "page_id" => Ok(Parent::Page {
                page_id: id_field("page_id")?,
            }),
            "database_id" => Ok(Parent::Database {
                database_id: id_field("database_id")?,
            }),
            "block_id" => Ok(Parent::Block {
                block_id: id_field("block_id")?,
            }),
            "workspace" => Ok(Parent::Workspace),
            _ => Ok(Parent::Other { parent_type, raw: value }),
        }
    }
}

impl From<Parent> for Value {
    fn from(parent: Parent) -> Self {
        match parent {
            Parent::Page { page_id } => serde_json::json!({"type": "page_id", "page_id": page_id}),
            Parent::Database { database_id } => {
                serde_json::json!({"type": "database_id", "database_id": database_id})
            }
            Parent::Block { block_id } => {
                serde_json::json!({"type": "block_id", "block_id": block_id})
            }
            Parent::Workspace => serde_json::json!({"type": "workspace", "workspace": true}),
            Parent::Other { raw, .. } => raw,
        }
    }
}

/// Top-level fields that must be present, with the JSON shape each must have.
const REQUIRED_FIELDS: [(&str, JsonShape); 4] = [
    ("id", JsonShape::String),
    ("created_time", JsonShape::String),
    ("last_edited_time", JsonShape::String),
    ("parent", JsonShape::Object),
];

#[derive(Debug, Clone, Copy)]
enum JsonShape {
    String,
    Object,
}

impl JsonShape {
    fn matches(self, value: &Value) -> bool {
        match self {
            JsonShape::String => value.is_string(),
            JsonShape::Object => value.is_object(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            JsonShape::String => "a string",
            JsonShape::Object => "an object",
        }
    }
}

/// Checks the `object` tag and the shared required fields before any typed
/// deserialization, so failures name the offending field.
pub(crate) fn check_envelope(value: &Value, expected: &'static str) -> Result<(), ValidationError> {
    let map = value.as_object().ok_or(ValidationError::WrongType {
        field: "<root>",
        expected: "an object",
    })?;

    match map.get("object") {
        None => return Err(ValidationError::MissingField("object")),
        Some(Value::String(found)) if found == expected => {}
        Some(Value::String(found)) => {
            return Err(ValidationError::ObjectMismatch {
                expected,
                found: found.clone(),
            })
        }
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "object",
                expected: "a string",
            })
        }
    }

    for (field, shape) in REQUIRED_FIELDS {
        match map.get(field) {
            None | Some(Value::Null) => return Err(ValidationError::MissingField(field)),
            Some(v) if !shape.matches(v) => {
                return Err(ValidationError::WrongType {
                    field,
                    expected: shape.name(),
                })
            }
            Some(_) => {}
        }
    }

    if map
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| id.trim().is_empty())
    {
        return Err(ValidationError::EmptyField("id"));
    }

    Ok(())
}

/// Validates and deserializes one top-level object.
pub fn parse_model<T: NotionModel>(value: &Value) -> Result<T, ValidationError> {
    check_envelope(value, T::OBJECT)?;
    Ok(T::deserialize(value)?)
}

/// Cuts a title for one-line renderings.
pub(crate) fn title_preview(title: &str) -> String {
    let limit = crate::constants::TITLE_PREVIEW_LENGTH;
    if title.chars().count() > limit {
        format!("{}...", title.chars().take(limit).collect::<String>())
    } else {
        title.to_string()
    }
}
