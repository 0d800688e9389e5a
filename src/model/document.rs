//! Document root node.

use super::content::wrong_content;
use super::{Block, Item, NodeKind, Properties, Value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The root of the document tree. Exactly one per file.
///
/// Content is a sequence of paragraph-slot nodes in reading order. Valid
/// property keys: `title`, `subject`, `author`.
///
/// A document is never content of another node, so a finished tree is at
/// most four kinds deep: Document → List → ListEntry → Paragraph → Text,
/// with lists nesting through entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    properties: Properties,
    content: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(NodeKind::Document),
            content: Vec::new(),
        }
    }

    /// Create a document from initial content items.
    ///
    /// Each item goes through [`append`](Self::append), including its
    /// auto-wrapping, so a string fragment becomes a paragraph with one run.
    pub fn with_content<I>(content: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut doc = Self::new();
        for item in content {
            doc.append(item)?;
        }
        Ok(doc)
    }

    /// Create a document from initial properties.
    ///
    /// Each entry goes through [`set`](Self::set), so an invalid key fails
    /// construction.
    pub fn with_properties<K, V, I>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut doc = Self::new();
        for (key, value) in properties {
            doc.set(key, value)?;
        }
        Ok(doc)
    }

    /// Store a metadata property (`title`, `subject`, `author`).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.properties.set(key, value)
    }

    /// Look up a metadata property; `Ok(None)` if valid but unset.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.properties.get(key)
    }

    /// Append a content item.
    ///
    /// Paragraph-slot nodes (Paragraph, Image, List) are appended directly;
    /// a text run or string fragment is wrapped in a fresh paragraph.
    /// Anything else fails with `WrongContentType` naming the document, and
    /// the content sequence is unchanged.
    pub fn append(&mut self, item: impl Into<Item>) -> Result<()> {
        match item.into().into_block() {
            Ok(block) => {
                self.content.push(block);
                Ok(())
            }
            Err(other) => Err(wrong_content(NodeKind::Document, &other)),
        }
    }

    /// Read-only view of the properties mapping.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The blocks in insertion order.
    pub fn content(&self) -> &[Block] {
        &self.content
    }

    /// Iterate over the blocks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.content.iter()
    }

    /// Number of top-level blocks.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Plain text of the whole document in reading order, blocks separated
    /// by blank lines.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document({} blocks)", self.content.len())
    }
}
