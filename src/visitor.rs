//! Visitor-based traversal of a document tree.
//!
//! Exporters can match on [`Block`](crate::model::Block) by hand, but most
//! only care about a few node kinds. [`DocumentVisitor`] provides defaulted
//! per-kind hooks and [`walk`] drives a top-down traversal in reading order,
//! so a renderer overrides just the hooks it needs.
//!
//! # Example
//!
//! ```
//! use richdoc::model::{Document, Paragraph};
//! use richdoc::visitor::{walk, DocumentVisitor, VisitorAction};
//!
//! struct ParagraphCounter(usize);
//!
//! impl DocumentVisitor for ParagraphCounter {
//!     fn visit_paragraph(&mut self, _para: &Paragraph) -> VisitorAction {
//!         self.0 += 1;
//!         VisitorAction::Continue
//!     }
//! }
//!
//! let mut doc = Document::new();
//! doc.append("one").unwrap();
//! doc.append("two").unwrap();
//!
//! let mut counter = ParagraphCounter(0);
//! walk(&doc, &mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use crate::model::{Block, Document, Image, List, ListEntry, Paragraph, Text};

/// Action returned by visitor hooks to control traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Descend into the node's content.
    #[default]
    Continue,

    /// Do not descend into this node.
    Skip,
}

impl VisitorAction {
    /// Check if this action stops descent into the node.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }
}

/// Trait for visiting document nodes during traversal.
///
/// All hooks default to `VisitorAction::Continue`; implement only the ones
/// the exporter cares about. Hooks on leaf-content nodes (text runs,
/// images) still return an action for uniformity, but there is nothing
/// below them to skip.
pub trait DocumentVisitor {
    /// Called once before the document's content is walked.
    fn on_document_start(&mut self, doc: &Document) {
        let _ = doc;
    }

    /// Called once after the document's content is walked.
    fn on_document_end(&mut self, doc: &Document) {
        let _ = doc;
    }

    /// Called for each paragraph, before its text runs.
    fn visit_paragraph(&mut self, para: &Paragraph) -> VisitorAction {
        let _ = para;
        VisitorAction::Continue
    }

    /// Called for each text run inside a visited paragraph.
    fn visit_text(&mut self, run: &Text) -> VisitorAction {
        let _ = run;
        VisitorAction::Continue
    }

    /// Called for each image.
    fn visit_image(&mut self, image: &Image) -> VisitorAction {
        let _ = image;
        VisitorAction::Continue
    }

    /// Called for each list, before its entries.
    fn visit_list(&mut self, list: &List) -> VisitorAction {
        let _ = list;
        VisitorAction::Continue
    }

    /// Called for each list entry, before its blocks.
    fn visit_list_entry(&mut self, entry: &ListEntry) -> VisitorAction {
        let _ = entry;
        VisitorAction::Continue
    }
}

/// Walk `doc` top-down in reading order, calling `visitor`'s hooks.
pub fn walk<V: DocumentVisitor>(doc: &Document, visitor: &mut V) {
    visitor.on_document_start(doc);
    for block in doc.iter() {
        walk_block(block, visitor);
    }
    visitor.on_document_end(doc);
}

/// Walk a single paragraph-slot block.
pub fn walk_block<V: DocumentVisitor>(block: &Block, visitor: &mut V) {
    match block {
        Block::Paragraph(para) => {
            if visitor.visit_paragraph(para).should_skip() {
                return;
            }
            for run in para.iter() {
                visitor.visit_text(run);
            }
        }
        Block::Image(image) => {
            visitor.visit_image(image);
        }
        Block::List(list) => {
            if visitor.visit_list(list).should_skip() {
                return;
            }
            for entry in list.iter() {
                if visitor.visit_list_entry(entry).should_skip() {
                    continue;
                }
                for inner in entry.iter() {
                    walk_block(inner, visitor);
                }
            }
        }
    }
}

/// Visitor that collects the plain text of every visited run.
#[derive(Debug, Default)]
pub struct TextCollector {
    fragments: Vec<String>,
}

impl TextCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected fragments joined in reading order.
    pub fn into_text(self) -> String {
        self.fragments.concat()
    }
}

impl DocumentVisitor for TextCollector {
    fn visit_text(&mut self, run: &Text) -> VisitorAction {
        self.fragments.push(run.plain_text());
        VisitorAction::Continue
    }
}
