use super::{title_preview, NotionModel, ObjectMeta};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A Notion page.
///
/// Property values stay raw: each carries its own `type` tag and callers
/// interpret it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(flatten)]
    pub meta: ObjectMeta,
    #[serde(default)]
    pub properties: IndexMap<String, Value>,
    #[serde(default)]
    pub icon: Option<Value>,
    #[serde(default)]
    pub cover: Option<Value>,
}

impl NotionModel for Page {
    const OBJECT: &'static str = "page";
    const NAME: &'static str = "Page";
}

impl Page {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    /// Plain-text title, or an empty string when the page has none.
    ///
    /// Reads the property keyed `"title"` whose declared type is `"title"`.
    pub fn title(&self) -> String {
        self.properties
            .get("title")
            .filter(|property| property.get("type").and_then(Value::as_str) == Some("title"))
            .and_then(|property| property.get("title"))
            .and_then(Value::as_array)
            .map(|runs| {
                runs.iter()
                    .filter_map(|run| run.get("plain_text").and_then(Value::as_str))
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// Raw value of a property by name, or `None`.
    pub fn property_value(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.title();
        if title.is_empty() {
            write!(f, "<Page id='{}'>", self.meta.id)
        } else {
            write!(f, "<Page id='{}' title='{}'>", self.meta.id, title_preview(&title))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_model, Parent};
    use crate::types::ValidationError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_page() -> Value {
        json!({
            "object": "page",
            "id": "page-uuid-4567",
            "created_time": "2023-01-10T11:00:00.000Z",
            "last_edited_time": "2023-01-11T12:30:00.000Z",
            "created_by": {"object": "user", "id": "user-uuid-3"},
            "last_edited_by": {"object": "user", "id": "user-uuid-4"},
            "parent": {"type": "database_id", "database_id": "db-uuid-123"},
            "archived": false,
            "url": "https://www.notion.so/page-url-4567",
            "icon": {"type": "emoji", "emoji": "📄"},
            "properties": {
                "title": {
                    "id": "title",
                    "type": "title",
                    "title": [
                        {"type": "text", "text": {"content": "Test Page Title ", "link": null}, "plain_text": "Test Page Title ", "href": null}
                    ]
                },
                "Status": {
                    "id": "%3A%3A%3A",
                    "type": "select",
                    "select": {"id": "select-id-1", "name": "In Progress", "color": "blue"}
                }
            },
            "some_future_field": {"nested": true}
        })
    }

    #[test]
    fn test_parse_page() {
        let page: Page = parse_model(&sample_page()).unwrap();
        assert_eq!(page.id(), "page-uuid-4567");
        assert_eq!(page.title(), "Test Page Title");
        assert_eq!(
            page.meta.parent,
            Parent::Database {
                database_id: "db-uuid-123".to_string()
            }
        );
        assert_eq!(page.meta.created_by.as_ref().unwrap().id, "user-uuid-3");
        assert_eq!(
            page.meta.created_time.to_rfc3339(),
            "2023-01-10T11:00:00+00:00"
        );
        assert!(page.icon.is_some());
        assert!(page.cover.is_none());
    }

    #[test]
    fn test_property_order_is_preserved() {
        let page: Page = parse_model(&sample_page()).unwrap();
        let names: Vec<&str> = page.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["title", "Status"]);
        assert_eq!(
            page.property_value("Status").unwrap()["select"]["name"],
            "In Progress"
        );
        assert!(page.property_value("Missing").is_none());
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let page: Page = parse_model(&json!({
            "object": "page",
            "id": "p-min",
            "created_time": "2023-01-10T11:00:00Z",
            "last_edited_time": "2023-01-10T11:00:00Z",
            "parent": {"type": "workspace", "workspace": true}
        }))
        .unwrap();
        assert!(!page.meta.archived);
        assert!(!page.meta.in_trash);
        assert_eq!(page.meta.url, "");
        assert!(page.properties.is_empty());
        assert_eq!(page.title(), "");
    }

    #[test]
    fn test_title_requires_title_type() {
        let mut value = sample_page();
        value["properties"]["title"]["type"] = json!("rich_text");
        let page: Page = parse_model(&value).unwrap();
        assert_eq!(page.title(), "");
    }

    #[test]
    fn test_database_tag_is_rejected() {
        let mut value = sample_page();
        value["object"] = json!("database");
        let err = parse_model::<Page>(&value).unwrap_err();
        assert!(matches!(err, ValidationError::ObjectMismatch { .. }));
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let mut value = sample_page();
        value["created_time"] = json!("yesterday");
        let err = parse_model::<Page>(&value).unwrap_err();
        assert!(matches!(err, ValidationError::Schema(_)));
    }

    #[test]
    fn test_parsing_twice_gives_equal_pages() {
        let value = sample_page();
        let first: Page = parse_model(&value).unwrap();
        let second: Page = parse_model(&value).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_truncates_title() {
        let mut value = sample_page();
        value["properties"]["title"]["title"][0]["plain_text"] =
            json!("A very long page title that keeps going and going");
        let page: Page = parse_model(&value).unwrap();
        assert_eq!(
            page.to_string(),
            "<Page id='page-uuid-4567' title='A very long page title that ke...'>"
        );
    }
}
