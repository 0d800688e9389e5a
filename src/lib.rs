//! # richdoc
//!
//! In-memory document object model for rich text.
//!
//! This library defines the typed node tree that format importers populate
//! and exporters walk: a [`Document`] of paragraphs, lists, images, and text
//! runs. Every node kind fixes its own valid property keys and its own
//! content type, and `append` auto-wraps loosely-typed items into whatever
//! intermediate nodes the tree requires, so an importer can hand a raw text
//! fragment to a document and get the full paragraph → run structure.
//!
//! ## Quick Start
//!
//! ```
//! use richdoc::{Document, List, Value};
//!
//! fn main() -> richdoc::Result<()> {
//!     let mut doc = Document::new();
//!     doc.set("title", "Notes")?;
//!
//!     // A plain fragment is wrapped into Paragraph -> Text automatically.
//!     doc.append("Hello, world.")?;
//!
//!     // Lists sit in paragraph slots; entries are synthesized the same way.
//!     doc.append(List::with_content(["first", "second"])?)?;
//!
//!     assert_eq!(doc.get("title")?.and_then(Value::as_str), Some("Notes"));
//!     assert_eq!(doc.plain_text(), "Hello, world.\n\nfirst\nsecond");
//!     Ok(())
//! }
//! ```
//!
//! ## Scope
//!
//! The model performs no parsing, rendering, or I/O; importers and exporters
//! are separate components that construct and traverse it. All operations
//! are synchronous in-memory mutations that either fully succeed or leave
//! the node unchanged.

pub mod error;
pub mod model;
pub mod visitor;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, Document, Image, Item, List, ListEntry, NodeKind, Paragraph, Properties, Text, Value,
};
pub use visitor::{walk, DocumentVisitor, VisitorAction};
