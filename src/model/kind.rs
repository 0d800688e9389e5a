//! Node kind registry: valid property keys and the child-kind chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property keys accepted by [`Text`](crate::model::Text) nodes.
pub const TEXT_KEYS: &[&str] = &["bold", "italic", "underline", "url", "sub", "super", "strike"];

/// Property keys accepted by [`Document`](crate::model::Document) nodes.
pub const DOCUMENT_KEYS: &[&str] = &["title", "subject", "author"];

/// Property keys accepted by [`Image`](crate::model::Image) nodes.
///
/// These are the picture control words of the RTF specification (blip type,
/// dimensions, goal sizes, scale factors, crop margins, binary-data markers,
/// unique id and tag), plus `underline`.
pub const IMAGE_KEYS: &[&str] = &[
    "emfblip",
    "pngblip",
    "jpegblip",
    "macpict",
    "pmmetafile",
    "wmetafile",
    "dibitmap",
    "wbitmap",
    "wbmbitspixel",
    "wbmplanes",
    "wbmwidthbytes",
    "picw",
    "pich",
    "picwgoal",
    "pichgoal",
    "picscalex",
    "picscaley",
    "picscaled",
    "piccropt",
    "piccropb",
    "piccropr",
    "piccropl",
    "picbmp",
    "picbpp",
    "bin",
    "blipupi",
    "blipuid",
    "bliptag",
    "underline",
];

const NO_KEYS: &[&str] = &[];

/// The closed set of node kinds in the document tree.
///
/// Each kind fixes two contracts: which property keys its nodes accept, and
/// what its content sequence holds. The kinds form a finite containment
/// chain (Document → Paragraph → Text, List → ListEntry → Paragraph → Text)
/// that the append auto-wrapping recursion descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Inline run of text with markup properties.
    Text,
    /// Block of text runs; cannot contain another paragraph.
    Paragraph,
    /// Raw image bytes with RTF picture metadata. Paragraph-slot compatible.
    Image,
    /// One item of a list; holds one or more paragraph-slot nodes.
    ListEntry,
    /// Bullet/numbered list of entries. Paragraph-slot compatible.
    List,
    /// Root node; exactly one per file.
    Document,
}

impl NodeKind {
    /// The fixed set of property keys nodes of this kind may store.
    pub const fn valid_keys(self) -> &'static [&'static str] {
        match self {
            NodeKind::Text => TEXT_KEYS,
            NodeKind::Image => IMAGE_KEYS,
            NodeKind::Document => DOCUMENT_KEYS,
            NodeKind::Paragraph | NodeKind::ListEntry | NodeKind::List => NO_KEYS,
        }
    }

    /// Check whether `key` is in this kind's valid-key set.
    pub fn allows_key(self, key: &str) -> bool {
        self.valid_keys().contains(&key)
    }

    /// The node kind this kind's content sequence holds, or `None` for the
    /// two leaf-content kinds (Text holds string fragments, Image holds raw
    /// bytes), which end the auto-wrap recursion.
    pub const fn child_kind(self) -> Option<NodeKind> {
        match self {
            NodeKind::Text | NodeKind::Image => None,
            NodeKind::Paragraph => Some(NodeKind::Text),
            NodeKind::ListEntry | NodeKind::Document => Some(NodeKind::Paragraph),
            NodeKind::List => Some(NodeKind::ListEntry),
        }
    }

    /// Whether nodes of this kind can sit in a paragraph slot (the content
    /// of a Document or ListEntry).
    pub const fn is_block(self) -> bool {
        matches!(self, NodeKind::Paragraph | NodeKind::Image | NodeKind::List)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Text => "Text",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Image => "Image",
            NodeKind::ListEntry => "ListEntry",
            NodeKind::List => "List",
            NodeKind::Document => "Document",
        };
        write!(f, "{}", name)
    }
}
