use super::blocks::*;
use super::common::BlockCommon;
use crate::types::{concat_plain_text, RichTextItem};
use std::fmt;

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Equation($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::ChildDatabase($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::Generic($pattern) => $result,
        }
    };
}

/// A parsed block: one variant per block type with a dedicated model, plus
/// `Generic` for everything else.
///
/// Built by [`parse_block`](super::parse_block), never deserialized directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Equation(EquationBlock),
    Divider(DividerBlock),
    ChildPage(ChildPageBlock),
    ChildDatabase(ChildDatabaseBlock),
    Bookmark(BookmarkBlock),
    Generic(GenericBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &str {
        match_all_blocks!(self, b => b.common.id())
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Check if block has children
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// The `type` discriminator, as sent by the API.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Equation(_) => "equation",
            Block::Divider(_) => "divider",
            Block::ChildPage(_) => "child_page",
            Block::ChildDatabase(_) => "child_database",
            Block::Bookmark(_) => "bookmark",
            Block::Generic(b) => &b.block_type,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Block::Generic(_))
    }

    /// Rich text runs of text-bearing blocks; `None` for the rest.
    pub fn rich_text(&self) -> Option<&[RichTextItem]> {
        match self {
            Block::Paragraph(b) => Some(&b.paragraph.rich_text),
            Block::Heading1(b) => Some(&b.heading_1.rich_text),
            Block::Heading2(b) => Some(&b.heading_2.rich_text),
            Block::Heading3(b) => Some(&b.heading_3.rich_text),
            Block::BulletedListItem(b) => Some(&b.bulleted_list_item.rich_text),
            Block::NumberedListItem(b) => Some(&b.numbered_list_item.rich_text),
            Block::ToDo(b) => Some(&b.to_do.rich_text),
            Block::Toggle(b) => Some(&b.toggle.rich_text),
            Block::Quote(b) => Some(&b.quote.rich_text),
            Block::Callout(b) => Some(&b.callout.rich_text),
            Block::Code(b) => Some(&b.code.rich_text),
            _ => None,
        }
    }

    /// Best-effort plain text of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Equation(b) => b.equation.expression.clone(),
            Block::ChildPage(b) => b.child_page.title.clone(),
            Block::ChildDatabase(b) => b.child_database.title.clone(),
            Block::Bookmark(b) => b.bookmark.url.clone(),
            other => other.rich_text().map(concat_plain_text).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Block id='{}' type='{}'>", self.id(), self.block_type())
    }
}
