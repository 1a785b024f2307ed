//! Benchmarks for tabifying rendered pages.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use docpost_tabs::{NoBehavior, Tabifier};
use docpost_tree::{HtmlParser, TreeNode};

/// Generate a page with `sections` level-2 sections of `tabs` level-4 tabs each.
fn generate_page(sections: usize, tabs: usize) -> String {
    let mut html = String::with_capacity(sections * tabs * 120);
    html.push_str("<h1>Document Title</h1>\n");

    for i in 0..sections {
        html.push_str(&format!("<h2 id=\"section-{i}\">Section {i}</h2>\n"));
        html.push_str("<p>Introduction with <strong>bold</strong> text.</p>\n");
        for j in 0..tabs {
            html.push_str(&format!("<h4 id=\"tab-{i}-{j}\">Tab {j}</h4>\n"));
            html.push_str(&format!("<p>Content of tab {j} in section {i}.</p>\n"));
            html.push_str("<pre><code>fn main() {}</code></pre>\n");
        }
        html.push_str("<hr>\n");
    }
    html
}

fn parse(html: &str) -> TreeNode {
    HtmlParser::new().parse(html)
}

fn bench_tabify_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabify_by_size");

    for (sections, tabs) in [(5, 2), (20, 3), (100, 4)] {
        let html = generate_page(sections, tabs);
        let tree = parse(&html);

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("page", format!("{sections}s_{tabs}t")),
            &tree,
            |b, tree| {
                b.iter_batched(
                    || tree.clone(),
                    |mut tree| Tabifier::default().tabify(&mut tree, &mut NoBehavior),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_parse_and_tabify(c: &mut Criterion) {
    let html = generate_page(20, 3);

    c.bench_function("parse_and_tabify_20_sections", |b| {
        b.iter(|| {
            let mut tree = parse(&html);
            Tabifier::default().tabify(&mut tree, &mut NoBehavior)
        });
    });
}

criterion_group!(benches, bench_tabify_by_size, bench_parse_and_tabify);
criterion_main!(benches);
