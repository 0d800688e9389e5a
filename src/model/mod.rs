//! Node model for rich-text document trees.
//!
//! This module defines the typed tree that format importers populate and
//! exporters walk: a root [`Document`] of paragraph-slot [`Block`]s, where a
//! slot holds a [`Paragraph`] of [`Text`] runs, an [`Image`], or a nested
//! [`List`] of [`ListEntry`] nodes. Every node owns a validated
//! [`Properties`] mapping and a content sequence in reading order; `append`
//! auto-wraps loosely-typed [`Item`]s into the intermediate node kinds the
//! tree requires.

mod content;
mod document;
mod image;
mod kind;
mod list;
mod paragraph;
mod properties;
mod text;

pub use content::{Block, Item};
pub use document::Document;
pub use image::Image;
pub use kind::{NodeKind, DOCUMENT_KEYS, IMAGE_KEYS, TEXT_KEYS};
pub use list::{List, ListEntry};
pub use paragraph::Paragraph;
pub use properties::{Properties, Value};
pub use text::Text;
