//! Paragraph node.

use super::content::wrong_content;
use super::{Item, NodeKind, Properties, Text, Value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A paragraph: zero or more text runs in reading order.
///
/// Paragraphs cannot contain other paragraphs (but see
/// [`List`](crate::model::List)). They have no valid property keys, so every
/// `set` is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    properties: Properties,
    content: Vec<Text>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(NodeKind::Paragraph),
            content: Vec::new(),
        }
    }

    /// Create a paragraph holding a single unstyled run of `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_run(Text::with_text(text))
    }

    /// Create a paragraph holding a single run.
    pub(crate) fn with_run(run: Text) -> Self {
        let mut para = Self::new();
        para.content.push(run);
        para
    }

    /// Create a paragraph from initial content items.
    ///
    /// Each item goes through [`append`](Self::append), including its
    /// auto-wrapping, so a string fragment becomes a text run.
    pub fn with_content<I>(content: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut para = Self::new();
        for item in content {
            para.append(item)?;
        }
        Ok(para)
    }

    /// Reject a property: paragraphs have an empty valid-key set.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.properties.set(key, value)
    }

    /// Look up a property; always fails for the same reason `set` does.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.properties.get(key)
    }

    /// Append a content item.
    ///
    /// A [`Text`] run is appended directly; a string fragment is wrapped in
    /// a fresh run first. Anything else fails with `WrongContentType`
    /// naming this paragraph, and the content sequence is unchanged.
    pub fn append(&mut self, item: impl Into<Item>) -> Result<()> {
        match item.into().into_text() {
            Ok(run) => {
                self.content.push(run);
                Ok(())
            }
            Err(other) => Err(wrong_content(NodeKind::Paragraph, &other)),
        }
    }

    /// Read-only view of the properties mapping.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The text runs in insertion order.
    pub fn content(&self) -> &[Text] {
        &self.content
    }

    /// Iterate over the runs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Text> {
        self.content.iter()
    }

    /// Number of runs.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the paragraph holds no runs.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Text of all runs concatenated in reading order.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(Text::plain_text).collect()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Paragraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Paragraph({} runs)", self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_run_directly() {
        let mut para = Paragraph::new();
        para.append(Text::with_text("one")).unwrap();
        para.append(Text::with_text("two")).unwrap();
        assert_eq!(para.len(), 2);
        assert_eq!(para.plain_text(), "onetwo");
    }

    #[test]
    fn test_append_wraps_fragment() {
        let mut para = Paragraph::new();
        para.append("plain").unwrap();
        assert_eq!(para.content()[0].plain_text(), "plain");
    }

    #[test]
    fn test_append_rejects_paragraph() {
        // Paragraphs cannot nest.
        let mut para = Paragraph::new();
        let err = para.append(Paragraph::with_text("inner")).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::WrongContentType {
                kind: NodeKind::Paragraph,
                actual: "Paragraph",
                ..
            }
        ));
        assert!(para.is_empty());
    }

    #[test]
    fn test_no_valid_properties() {
        let mut para = Paragraph::new();
        assert!(para.set("align", "left").is_err());
        assert!(para.get("align").is_err());
    }
}
