//! Loosely-typed content items and the paragraph-slot enum.
//!
//! [`Item`] is what `append` accepts: a raw text fragment, a raw byte blob,
//! or any already-built node that can be content. [`Block`] is the closed set
//! of nodes that can sit in a paragraph slot (the content of a Document or a
//! ListEntry): a plain Paragraph, an Image, or a nested List.
//!
//! The `into_*` coercions drive the auto-wrap recursion. Each one either
//! produces the target child type (wrapping the item in freshly synthesized
//! intermediate nodes where needed) or hands the item back untouched, so the
//! outermost `append` frame reports the original item in its error and no
//! byte blob is cloned on the failure path.

use super::{Image, List, ListEntry, NodeKind, Paragraph, Text};
use crate::error::Error;
use log::trace;
use serde::{Deserialize, Serialize};

/// A loosely-typed item accepted by `append`.
///
/// This is a transient argument type, not part of the stored tree, so it is
/// not serializable. `Document` has no variant here: a document is the root
/// of the tree, exactly one per file, and can never be content of another
/// node.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// An atomic text fragment.
    Str(String),
    /// A raw byte blob (binary image data).
    Bytes(Vec<u8>),
    /// A text run node.
    Text(Text),
    /// A paragraph node.
    Paragraph(Paragraph),
    /// An image node.
    Image(Image),
    /// A list entry node.
    ListEntry(ListEntry),
    /// A list node.
    List(List),
}

impl Item {
    /// Type name used in `WrongContentType` diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Item::Str(_) => "str",
            Item::Bytes(_) => "bytes",
            Item::Text(_) => "Text",
            Item::Paragraph(_) => "Paragraph",
            Item::Image(_) => "Image",
            Item::ListEntry(_) => "ListEntry",
            Item::List(_) => "List",
        }
    }

    /// Short display of the value, for diagnostics.
    pub fn summary(&self) -> String {
        match self {
            Item::Str(s) => format!("{:?}", s),
            Item::Bytes(b) => format!("{} bytes", b.len()),
            Item::Text(t) => t.to_string(),
            Item::Paragraph(p) => p.to_string(),
            Item::Image(i) => i.to_string(),
            Item::ListEntry(e) => e.to_string(),
            Item::List(l) => l.to_string(),
        }
    }

    /// Coerce into a [`Text`] run: a Text node passes through, a string
    /// fragment is wrapped in a fresh run, anything else is handed back.
    pub(crate) fn into_text(self) -> std::result::Result<Text, Item> {
        match self {
            Item::Text(run) => Ok(run),
            Item::Str(s) => {
                trace!("wrapping fragment {:?} in a new Text run", s);
                Ok(Text::with_text(s))
            }
            other => Err(other),
        }
    }

    /// Coerce into a [`Block`]: paragraph-slot nodes pass through, anything
    /// else is wrapped in a fresh Paragraph if it can reach a Text run.
    pub(crate) fn into_block(self) -> std::result::Result<Block, Item> {
        match self {
            Item::Paragraph(p) => Ok(Block::Paragraph(p)),
            Item::Image(i) => Ok(Block::Image(i)),
            Item::List(l) => Ok(Block::List(l)),
            other => {
                let run = other.into_text()?;
                trace!("wrapping {} in a new Paragraph", run);
                Ok(Block::Paragraph(Paragraph::with_run(run)))
            }
        }
    }

    /// Coerce into a [`ListEntry`]: an entry passes through, anything else
    /// is wrapped in a fresh entry if it can reach a paragraph slot.
    pub(crate) fn into_entry(self) -> std::result::Result<ListEntry, Item> {
        match self {
            Item::ListEntry(entry) => Ok(entry),
            other => {
                let block = other.into_block()?;
                trace!("wrapping {} block in a new ListEntry", block.kind());
                Ok(ListEntry::with_block(block))
            }
        }
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Str(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Str(s)
    }
}

impl From<char> for Item {
    fn from(c: char) -> Self {
        Item::Str(c.to_string())
    }
}

impl From<Vec<u8>> for Item {
    fn from(b: Vec<u8>) -> Self {
        Item::Bytes(b)
    }
}

impl From<&[u8]> for Item {
    fn from(b: &[u8]) -> Self {
        Item::Bytes(b.to_vec())
    }
}

impl From<Text> for Item {
    fn from(run: Text) -> Self {
        Item::Text(run)
    }
}

impl From<Paragraph> for Item {
    fn from(p: Paragraph) -> Self {
        Item::Paragraph(p)
    }
}

impl From<Image> for Item {
    fn from(i: Image) -> Self {
        Item::Image(i)
    }
}

impl From<ListEntry> for Item {
    fn from(e: ListEntry) -> Self {
        Item::ListEntry(e)
    }
}

impl From<List> for Item {
    fn from(l: List) -> Self {
        Item::List(l)
    }
}

impl From<Block> for Item {
    fn from(block: Block) -> Self {
        match block {
            Block::Paragraph(p) => Item::Paragraph(p),
            Block::Image(i) => Item::Image(i),
            Block::List(l) => Item::List(l),
        }
    }
}

/// A node occupying a paragraph slot.
///
/// Image and List are structural specializations of Paragraph: usable
/// wherever a Paragraph is expected, each with its own property and content
/// contracts. This enum is that capability made explicit; parents holding
/// "paragraph" children hold `Block` values, not a type-hierarchy check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A plain paragraph of text runs.
    Paragraph(Paragraph),
    /// An image in paragraph position.
    Image(Image),
    /// A nested list.
    List(List),
}

impl Block {
    /// Kind of the node in the slot.
    pub fn kind(&self) -> NodeKind {
        match self {
            Block::Paragraph(_) => NodeKind::Paragraph,
            Block::Image(_) => NodeKind::Image,
            Block::List(_) => NodeKind::List,
        }
    }

    /// The paragraph, if the slot holds one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// The image, if the slot holds one.
    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Block::Image(i) => Some(i),
            _ => None,
        }
    }

    /// The list, if the slot holds one.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Block::List(l) => Some(l),
            _ => None,
        }
    }

    /// Plain text of the slot in reading order; empty for images.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Image(_) => String::new(),
            Block::List(l) => l.plain_text(),
        }
    }
}

/// Build the `WrongContentType` error for a rejected item.
pub(crate) fn wrong_content(kind: NodeKind, item: &Item) -> Error {
    Error::WrongContentType {
        kind,
        actual: item.type_name(),
        value: item.summary(),
    }
}
