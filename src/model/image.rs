//! Image node.

use super::content::wrong_content;
use super::{Item, NodeKind, Properties, Value};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An image in paragraph position.
///
/// Content is raw binary image data. The valid property keys are the RTF
/// picture control words (see [`IMAGE_KEYS`](crate::model::IMAGE_KEYS)):
/// blip type markers, pixel and goal dimensions, scale factors, crop
/// margins, bit depth, binary-data markers, unique id and tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    properties: Properties,
    content: Vec<Vec<u8>>,
}

impl Image {
    /// Create a new empty image.
    pub fn new() -> Self {
        Self {
            properties: Properties::new(NodeKind::Image),
            content: Vec::new(),
        }
    }

    /// Create an image holding one blob of binary data.
    pub fn with_data(data: Vec<u8>) -> Self {
        let mut image = Self::new();
        image.content.push(data);
        image
    }

    /// Create an image from initial content items.
    ///
    /// Each item goes through [`append`](Self::append); only byte blobs are
    /// accepted.
    pub fn with_content<I>(content: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut image = Self::new();
        for item in content {
            image.append(item)?;
        }
        Ok(image)
    }

    /// Create an image from initial properties.
    ///
    /// Each entry goes through [`set`](Self::set), so an invalid key fails
    /// construction and no partially-built node is returned.
    pub fn with_properties<K, V, I>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut image = Self::new();
        for (key, value) in properties {
            image.set(key, value)?;
        }
        Ok(image)
    }

    /// Store a picture property, validated against the image key set.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        self.properties.set(key, value)
    }

    /// Look up a picture property; `Ok(None)` if valid but unset.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        self.properties.get(key)
    }

    /// Append a content item.
    ///
    /// Image is a leaf-content kind: only raw byte blobs are accepted,
    /// there is no deeper kind to wrap into.
    pub fn append(&mut self, item: impl Into<Item>) -> Result<()> {
        match item.into() {
            Item::Bytes(data) => {
                self.content.push(data);
                Ok(())
            }
            other => Err(wrong_content(NodeKind::Image, &other)),
        }
    }

    /// Read-only view of the properties mapping.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// The byte blobs in insertion order.
    pub fn content(&self) -> &[Vec<u8>] {
        &self.content
    }

    /// The first blob of image data, if any.
    pub fn data(&self) -> Option<&[u8]> {
        self.content.first().map(Vec::as_slice)
    }

    /// Total size of the image data in bytes.
    pub fn size(&self) -> usize {
        self.content.iter().map(Vec::len).sum()
    }

    /// Check if the image holds no data.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Image({} bytes, {} properties)",
            self.size(),
            self.properties.len()
        )
    }
}
