use super::common::BlockCommon;
use crate::types::RichTextItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_color() -> String {
    "default".to_string()
}

fn default_code_language() -> String {
    "plain text".to_string()
}

/// Text content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for TextBlockContent {
    fn default() -> Self {
        Self {
            rich_text: Vec::new(),
            color: default_color(),
        }
    }
}

/// Heading content; headings may be toggleable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub is_toggleable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub icon: Option<Icon>,
}

/// Icon types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Icon {
    #[serde(rename = "emoji")]
    Emoji { emoji: String },
    #[serde(rename = "external")]
    External { external: ExternalFile },
    #[serde(rename = "file")]
    File { file: NotionFile },
}

/// A file hosted outside Notion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// A Notion-hosted file; its URL expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionFile {
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockContent {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
    #[serde(default = "default_code_language")]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationBlockContent {
    pub expression: String,
}

/// Title carried by `child_page` and `child_database` blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildTitleContent {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlockContent {
    pub url: String,
    #[serde(default)]
    pub caption: Vec<RichTextItem>,
}

/// Content of blocks that carry nothing, such as dividers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EmptyContent {}

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub paragraph: TextBlockContent,
}

/// Heading 1 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading1Block {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub heading_1: HeadingBlockContent,
}

/// Heading 2 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading2Block {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub heading_2: HeadingBlockContent,
}

/// Heading 3 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading3Block {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub heading_3: HeadingBlockContent,
}

/// Bulleted list item block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletedListItemBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub bulleted_list_item: TextBlockContent,
}

/// Numbered list item block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedListItemBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub numbered_list_item: TextBlockContent,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub to_do: ToDoBlockContent,
}

/// Toggle block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub toggle: TextBlockContent,
}

/// Quote block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub quote: TextBlockContent,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub callout: CalloutBlockContent,
}

/// Code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub code: CodeBlockContent,
}

/// Equation block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub equation: EquationBlockContent,
}

/// Divider block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub divider: EmptyContent,
}

/// Child page block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPageBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub child_page: ChildTitleContent,
}

/// Child database block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDatabaseBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub child_database: ChildTitleContent,
}

/// Bookmark block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub bookmark: BookmarkBlockContent,
}

/// Any block this crate has no dedicated model for, or whose content did
/// not match its dedicated model.
///
/// The type-specific payload is kept as raw JSON under `content`. It is
/// read from the key named by `type` and written back under `content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(skip_deserializing)]
    pub content: Option<Value>,
}
