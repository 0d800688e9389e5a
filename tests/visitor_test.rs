//! Integration tests for visitor-based traversal.

use richdoc::model::{Document, Image, List, ListEntry, Paragraph, Text};
use richdoc::visitor::{walk, DocumentVisitor, TextCollector, VisitorAction};

/// Custom visitor that tracks visit counts.
struct CountingVisitor {
    paragraph_count: usize,
    text_count: usize,
    image_count: usize,
    list_count: usize,
    entry_count: usize,
    document_starts: usize,
}

impl CountingVisitor {
    fn new() -> Self {
        Self {
            paragraph_count: 0,
            text_count: 0,
            image_count: 0,
            list_count: 0,
            entry_count: 0,
            document_starts: 0,
        }
    }
}

impl DocumentVisitor for CountingVisitor {
    fn on_document_start(&mut self, _doc: &Document) {
        self.document_starts += 1;
    }

    fn visit_paragraph(&mut self, _para: &Paragraph) -> VisitorAction {
        self.paragraph_count += 1;
        VisitorAction::Continue
    }

    fn visit_text(&mut self, _run: &Text) -> VisitorAction {
        self.text_count += 1;
        VisitorAction::Continue
    }

    fn visit_image(&mut self, _image: &Image) -> VisitorAction {
        self.image_count += 1;
        VisitorAction::Continue
    }

    fn visit_list(&mut self, _list: &List) -> VisitorAction {
        self.list_count += 1;
        VisitorAction::Continue
    }

    fn visit_list_entry(&mut self, _entry: &ListEntry) -> VisitorAction {
        self.entry_count += 1;
        VisitorAction::Continue
    }
}

fn sample_document() -> Document {
    let mut doc = Document::new();
    doc.append("intro").unwrap();
    doc.append(Image::with_data(vec![0xFF, 0xD8, 0xFF])).unwrap();

    // A two-entry list whose second entry holds a nested list.
    let mut list = List::new();
    list.append("first item").unwrap();
    let mut entry = ListEntry::new();
    entry.append(List::with_content(["nested item"]).unwrap()).unwrap();
    list.append(entry).unwrap();

    doc.append(list).unwrap();
    doc
}

#[test]
fn test_counting_visitor_sees_whole_tree() {
    let doc = sample_document();
    let mut visitor = CountingVisitor::new();
    walk(&doc, &mut visitor);

    assert_eq!(visitor.document_starts, 1);
    // intro + first item + nested item
    assert_eq!(visitor.paragraph_count, 3);
    assert_eq!(visitor.text_count, 3);
    assert_eq!(visitor.image_count, 1);
    // outer list + nested list
    assert_eq!(visitor.list_count, 2);
    // two outer entries + one nested entry
    assert_eq!(visitor.entry_count, 3);
}

#[test]
fn test_skip_list_prunes_subtree() {
    struct SkipLists {
        entries_seen: usize,
    }

    impl DocumentVisitor for SkipLists {
        fn visit_list(&mut self, _list: &List) -> VisitorAction {
            VisitorAction::Skip
        }

        fn visit_list_entry(&mut self, _entry: &ListEntry) -> VisitorAction {
            self.entries_seen += 1;
            VisitorAction::Continue
        }
    }

    let doc = sample_document();
    let mut visitor = SkipLists { entries_seen: 0 };
    walk(&doc, &mut visitor);
    assert_eq!(visitor.entries_seen, 0);
}

#[test]
fn test_text_collector_reading_order() {
    let doc = sample_document();
    let mut collector = TextCollector::new();
    walk(&doc, &mut collector);
    assert_eq!(collector.into_text(), "introfirst itemnested item");
}

#[test]
fn test_walk_empty_document() {
    let doc = Document::new();
    let mut visitor = CountingVisitor::new();
    walk(&doc, &mut visitor);
    assert_eq!(visitor.document_starts, 1);
    assert_eq!(visitor.paragraph_count, 0);
}
