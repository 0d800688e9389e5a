//! Benchmarks for document tree construction.
//!
//! Run with: cargo bench
//!
//! Measures direct-typed appends against auto-wrapped appends, which
//! synthesize the intermediate Paragraph/Text nodes per item.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use richdoc::{Document, List, Paragraph, Text};

/// Benchmark appending pre-built paragraphs (no wrapping).
fn bench_direct_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_append");

    for count in [100, 1_000, 10_000].iter() {
        group.bench_function(format!("{}_paragraphs", count), |b| {
            b.iter(|| {
                let mut doc = Document::new();
                for i in 0..*count {
                    let para = Paragraph::with_text(format!("paragraph {}", i));
                    doc.append(black_box(para)).unwrap();
                }
                doc
            });
        });
    }

    group.finish();
}

/// Benchmark appending raw fragments (two levels of auto-wrapping each).
fn bench_wrapped_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapped_append");

    for count in [100, 1_000, 10_000].iter() {
        group.bench_function(format!("{}_fragments", count), |b| {
            b.iter(|| {
                let mut doc = Document::new();
                for i in 0..*count {
                    doc.append(black_box(format!("fragment {}", i))).unwrap();
                }
                doc
            });
        });
    }

    group.finish();
}

/// Benchmark building nested lists through the full wrapping chain.
fn bench_list_construction(c: &mut Criterion) {
    c.bench_function("nested_list_1000_items", |b| {
        b.iter(|| {
            let mut list = List::new();
            for i in 0..1_000 {
                list.append(black_box(format!("item {}", i))).unwrap();
            }
            list
        });
    });
}

/// Benchmark plain-text extraction from a built tree.
fn bench_plain_text(c: &mut Criterion) {
    let mut doc = Document::new();
    for i in 0..1_000 {
        let mut para = Paragraph::new();
        para.append(Text::with_text(format!("run {}", i))).unwrap();
        doc.append(para).unwrap();
    }

    c.bench_function("plain_text_1000_paragraphs", |b| {
        b.iter(|| black_box(&doc).plain_text());
    });
}

criterion_group!(
    benches,
    bench_direct_append,
    bench_wrapped_append,
    bench_list_construction,
    bench_plain_text,
);
criterion_main!(benches);
