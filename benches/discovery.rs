//! Benchmarks for slice discovery.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use figslice::discovery::sanitize_name;
use figslice::{select_slices, DiscoveryOptions, Node, SliceFilter};

/// A document with `pages` pages, each holding `frames` frames of `depth`
/// nested groups. Every third frame carries export settings.
fn synthetic_document(pages: usize, frames: usize, depth: usize) -> Node {
    let pages = (0..pages)
        .map(|p| {
            let frames = (0..frames)
                .map(|f| {
                    let mut node =
                        Node::new(format!("{}:{}", p, f), format!("icon {}", f % 50), "FRAME");
                    if f % 3 == 0 {
                        node = node.with_export_settings(vec![json!({ "format": "PNG" })]);
                    }
                    for d in 0..depth {
                        let id = format!("{}:{}:{}", p, f, d);
                        node = Node::new(id, format!("group/{}", d), "GROUP")
                            .with_children(vec![node]);
                    }
                    node
                })
                .collect();
            Node::new(format!("0:{}", p), format!("Page {}", p), "CANVAS").with_children(frames)
        })
        .collect();

    Node::new("0:0", "Document", "DOCUMENT").with_children(pages)
}

fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");

    let small = synthetic_document(2, 50, 2);
    let large = synthetic_document(10, 500, 6);

    let by_settings = SliceFilter::new(&DiscoveryOptions::default()).unwrap();
    let by_name = SliceFilter::new(&DiscoveryOptions {
        page_pattern: Some("^Page [0-4]$".to_string()),
        name_pattern: Some(r"^icon \d+$".to_string()),
    })
    .unwrap();

    group.bench_function("select_settings_small", |b| {
        b.iter(|| select_slices(black_box(&small), &by_settings).unwrap())
    });

    group.bench_function("select_settings_large", |b| {
        b.iter(|| select_slices(black_box(&large), &by_settings).unwrap())
    });

    group.bench_function("select_pattern_large", |b| {
        b.iter(|| select_slices(black_box(&large), &by_name).unwrap())
    });

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    c.bench_function("sanitize_name", |b| {
        b.iter(|| sanitize_name(black_box("  Icons / Home : Large   <hover>  "), "12:34"))
    });
}

criterion_group!(benches, bench_discovery, bench_sanitize);
criterion_main!(benches);
