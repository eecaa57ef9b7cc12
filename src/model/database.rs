use super::{title_preview, NotionModel, ObjectMeta};
use crate::types::{concat_plain_text, RichTextItem};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A Notion database: its title, description and property schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(flatten)]
    pub meta: ObjectMeta,
    #[serde(default)]
    pub title: Vec<RichTextItem>,
    #[serde(default)]
    pub description: Vec<RichTextItem>,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
    #[serde(default)]
    pub is_inline: bool,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub cover: Option<Value>,
}

impl NotionModel for Database {
    const OBJECT: &'static str = "database";
    const NAME: &'static str = "Database";
}

impl Database {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Plain-text title. Database titles live at the top level, not in a property.
    pub fn title(&self) -> String {
        concat_plain_text(&self.title)
    }

    pub fn description(&self) -> String {
        concat_plain_text(&self.description)
    }

    /// Raw schema of a property by name, or `None`.
    pub fn property_schema(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title();
        if title.is_empty() {
            write!(f, "<Database id='{}'>", self.meta.id)
        } else {
            write!(
                f,
                "<Database id='{}' title='{}'>",
                self.meta.id,
                title_preview(&title)
            )
        }
    }
}
