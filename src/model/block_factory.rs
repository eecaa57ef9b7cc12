//! Turns a raw block payload into a [`Block`].
//!
//! Dispatch goes through a static registry keyed by the `type` field. A
//! payload whose type is missing from the registry, or whose typed content
//! does not match its model, degrades to [`Block::Generic`].

use super::block::Block;
use super::blocks::*;
use super::check_envelope;
use crate::types::ValidationError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

type BlockParser = fn(&Value) -> Result<Block, serde_json::Error>;

macro_rules! registry {
    ($($type_name:literal => $variant:ident($model:ty)),* $(,)?) => {{
        let mut map: HashMap<&'static str, BlockParser> = HashMap::new();
        $(
            map.insert($type_name, |value| <$model>::deserialize(value).map(Block::$variant));
        )*
        map
    }};
}

static BLOCK_PARSERS: Lazy<HashMap<&'static str, BlockParser>> = Lazy::new(|| {
    registry! {
        "paragraph" => Paragraph(ParagraphBlock),
        "heading_1" => Heading1(Heading1Block),
        "heading_2" => Heading2(Heading2Block),
        "heading_3" => Heading3(Heading3Block),
        "bulleted_list_item" => BulletedListItem(BulletedListItemBlock),
        "numbered_list_item" => NumberedListItem(NumberedListItemBlock),
        "to_do" => ToDo(ToDoBlock),
        "toggle" => Toggle(ToggleBlock),
        "quote" => Quote(QuoteBlock),
        "callout" => Callout(CalloutBlock),
        "code" => Code(CodeBlock),
        "equation" => Equation(EquationBlock),
        "divider" => Divider(DividerBlock),
        "child_page" => ChildPage(ChildPageBlock),
        "child_database" => ChildDatabase(ChildDatabaseBlock),
        "bookmark" => Bookmark(BookmarkBlock),
    }
});

/// Whether `block_type` has a dedicated variant.
pub fn is_known_block_type(block_type: &str) -> bool {
    BLOCK_PARSERS.contains_key(block_type)
}

/// Parses one block payload.
///
/// Fails only when the payload is not a structurally valid block at all;
/// unknown or malformed type-specific content yields [`Block::Generic`].
pub fn parse_block(value: &Value) -> Result<Block, ValidationError> {
    check_envelope(value, "block")?;

    let block_type = value.get("type").and_then(Value::as_str);

    if let Some(parser) = block_type.and_then(|t| BLOCK_PARSERS.get(t)) {
        match parser(value) {
            Ok(block) => return Ok(block),
            Err(e) => log::warn!(
                "Block '{}' of type '{}' did not match its model, keeping it generic: {}",
                value["id"].as_str().unwrap_or_default(),
                block_type.unwrap_or_default(),
                e
            ),
        }
    } else if let Some(unknown) = block_type {
        log::debug!("No dedicated model for block type '{}'", unknown);
    }

    let mut generic = GenericBlock::deserialize(value)?;
    generic.content = value.get(&generic.block_type).cloned();
    Ok(Block::Generic(generic))
}
