use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Formatting flags on a rich text run. Missing flags read as off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: "default".to_string(),
        }
    }
}

/// One run of rich text.
///
/// `plain_text` is the rendering every variant (text, mention, equation)
/// carries; the variant-specific payload is kept raw under `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(rename = "type", default)]
    pub text_type: Option<String>,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

impl RichTextItem {
    /// Create a plain text item, mostly for tests and builders.
    pub fn plain_text(text: &str) -> Self {
        let mut payload = serde_json::Map::new();
        payload.insert(
            "text".to_string(),
            serde_json::json!({ "content": text, "link": null }),
        );
        Self {
            text_type: Some("text".to_string()),
            plain_text: text.to_string(),
            href: None,
            annotations: Annotations::default(),
            payload,
        }
    }
}

/// Concatenates the plain-text runs and trims the result.
pub fn concat_plain_text(items: &[RichTextItem]) -> String {
    items
        .iter()
        .map(|item| item.plain_text.as_str())
        .collect::<String>()
        .trim()
        .to_string()
}
