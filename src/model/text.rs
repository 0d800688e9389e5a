//! Text run node.

use super::content::wrong_content;
use super::{Item, NodeKind, Properties, Value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A run of text with markup properties like `bold` or `italic` (or
/// `url` for hyperlinks).
///
/// Text runs are rendered inline, not as blocks, and do not inherit
/// properties from their parent. Content is a sequence of atomic text
/// fragments in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    properties: Properties,
    content: Vec<String>,
}

impl Text {
    /// Create a new empty text run.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(NodeKind::Text),
            content: Vec::new(),
        }
    }

    /// Create a text run holding a single fragment.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut run = Self::new();
        run.content.push(text.into());
        run
    }

    /// Create a text run from initial content items.
    ///
    /// Each item goes through [`append`](Self::append), so anything other
    /// than a string fragment is rejected.
    pub fn with_content<I>(content: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut run = Self::new();
        for item in content {
            run.append(item)?;
        }
        Ok(run)
    }

    /// Create a text run from initial properties.
    ///
    /// Each entry goes through [`set`](Self::set), so an invalid key fails
    /// construction.
    pub fn with_properties<K, V, I>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut run = Self::new();
        for (key, value) in properties {
            run.set(key, value)?;
        }
        Ok(run)
    }

    /// Store a markup property, validated against the Text key set
    /// (`bold`, `italic`, `underline`, `url`, `sub`, `super`, `strike`).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.properties.set(key, value)
    }

    /// Look up a markup property; `Ok(None)` if valid but unset.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.properties.get(key)
    }

    /// Append a content item.
    ///
    /// Text is a leaf-content kind: only string fragments are accepted,
    /// there is no deeper kind to wrap into.
    pub fn append(&mut self, item: impl Into<Item>) -> Result<()> {
        match item.into() {
            Item::Str(s) => {
                self.content.push(s);
                Ok(())
            }
            other => Err(wrong_content(NodeKind::Text, &other)),
        }
    }

    /// Read-only view of the properties mapping.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The text fragments in insertion order.
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Iterate over the fragments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.content.iter()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the run holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// All fragments concatenated in reading order.
    pub fn plain_text(&self) -> String {
        self.content.concat()
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Text({:?}, {} properties)",
            self.plain_text(),
            self.properties.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_fragment() {
        let mut run = Text::new();
        run.append("Hello").unwrap();
        run.append(" world").unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run.plain_text(), "Hello world");
    }

    #[test]
    fn test_append_rejects_bytes() {
        let mut run = Text::new();
        let err = run.append(vec![0u8, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::WrongContentType {
                kind: NodeKind::Text,
                actual: "bytes",
                ..
            }
        ));
        assert!(run.is_empty());
    }

    #[test]
    fn test_with_properties() {
        let run = Text::with_properties([("bold", true)]).unwrap();
        assert_eq!(run.get("bold").unwrap(), Some(&Value::Bool(true)));

        assert!(Text::with_properties([("margin", true)]).is_err());
    }

    #[test]
    fn test_display() {
        let mut run = Text::with_text("Foo");
        run.set("italic", true).unwrap();
        assert_eq!(run.to_string(), "Text(\"Foo\", 1 properties)");
    }
}
