//! List and list entry nodes.

use super::content::wrong_content;
use super::{Block, Item, NodeKind, Properties, Value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One item of a list: one or more paragraph-slot nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    properties: Properties,
    content: Vec<Block>,
}

impl ListEntry {
    /// Create a new empty list entry.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(NodeKind::ListEntry),
            content: Vec::new(),
        }
    }

    /// Create an entry holding a single block.
    pub(crate) fn with_block(block: Block) -> Self {
        let mut entry = Self::new();
        entry.content.push(block);
        entry
    }

    /// Create an entry from initial content items.
    ///
    /// Each item goes through [`append`](Self::append), including its
    /// auto-wrapping, so a string fragment becomes a paragraph with one run.
    pub fn with_content<I>(content: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut entry = Self::new();
        for item in content {
            entry.append(item)?;
        }
        Ok(entry)
    }

    /// Reject a property: list entries have an empty valid-key set.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.properties.set(key, value)
    }

    /// Look up a property; always fails for the same reason `set` does.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.properties.get(key)
    }

    /// Append a content item.
    ///
    /// Paragraph-slot nodes (Paragraph, Image, and List, so lists nest) are
    /// appended directly; a text run or string fragment is wrapped in a
    /// fresh paragraph. Anything else fails with `WrongContentType` naming
    /// this entry, and the content sequence is unchanged.
    pub fn append(&mut self, item: impl Into<Item>) -> Result<()> {
        match item.into().into_block() {
            Ok(block) => {
                self.content.push(block);
                Ok(())
            }
            Err(other) => Err(wrong_content(NodeKind::ListEntry, &other)),
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

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the entry holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Text of the entry's blocks in reading order, newline-separated.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ListEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListEntry({} blocks)", self.content.len())
    }
}

/// A bullet/numbered list of entries, in paragraph position.
///
/// A List occupies a paragraph slot itself, so lists nest: a List appended
/// to a ListEntry sits there directly, one level down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    properties: Properties,
    content: Vec<ListEntry>,
}

impl List {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(NodeKind::List),
            content: Vec::new(),
        }
    }

    /// Create a list from initial content items.
    ///
    /// Each item goes through [`append`](Self::append), including its
    /// auto-wrapping, so a string fragment becomes a full
    /// entry → paragraph → run chain.
    pub fn with_content<I>(content: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut list = Self::new();
        for item in content {
            list.append(item)?;
        }
        Ok(list)
    }

    /// Reject a property: lists have an empty valid-key set.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.properties.set(key, value)
    }

    /// Look up a property; always fails for the same reason `set` does.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.properties.get(key)
    }

    /// Append a content item.
    ///
    /// A [`ListEntry`] is appended directly; anything that can occupy a
    /// paragraph slot (or be wrapped into one) is wrapped in a fresh entry
    /// first. Anything else fails with `WrongContentType` naming this list,
    /// and the content sequence is unchanged.
    pub fn append(&mut self, item: impl Into<Item>) -> Result<()> {
        match item.into().into_entry() {
            Ok(entry) => {
                self.content.push(entry);
                Ok(())
            }
            Err(other) => Err(wrong_content(NodeKind::List, &other)),
        }
    }

    /// Read-only view of the properties mapping.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The entries in insertion order.
    pub fn content(&self) -> &[ListEntry] {
        &self.content
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ListEntry> {
        self.content.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Text of all entries in reading order, newline-separated.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(ListEntry::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "List({} entries)", self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_list_wraps_fragment_to_full_chain() {
        let list = List::with_content(["Foo"]).unwrap();
        assert_eq!(list.len(), 1);
        let entry = &list.content()[0];
        let para = entry.content()[0].as_paragraph().unwrap();
        assert_eq!(para.content()[0].plain_text(), "Foo");
    }

    #[test]
    fn test_entry_accepts_blocks_directly() {
        let mut entry = ListEntry::new();
        entry.append(Paragraph::with_text("a")).unwrap();
        entry.append(crate::model::Image::with_data(vec![1, 2])).unwrap();
        entry.append(List::new()).unwrap();
        assert_eq!(entry.len(), 3);
    }

    #[test]
    fn test_nested_lists() {
        let inner = List::with_content(["leaf"]).unwrap();
        let mut entry = ListEntry::new();
        entry.append(inner).unwrap();

        let mut outer = List::new();
        outer.append(entry).unwrap();

        let nested = outer.content()[0].content()[0].as_list().unwrap();
        assert_eq!(nested.plain_text(), "leaf");
    }

    #[test]
    fn test_list_rejects_bytes() {
        // Bytes cannot be coerced through ListEntry -> Paragraph -> Text,
        // whose leaf content is a string fragment.
        let mut list = List::new();
        let err = list.append(vec![0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::WrongContentType {
                kind: NodeKind::List,
                actual: "bytes",
                ..
            }
        ));
        assert!(list.is_empty());
    }
}
