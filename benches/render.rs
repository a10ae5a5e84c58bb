//! Benchmarks for rich-text decoding and rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use kirjo::document::{BlockKind, Document, Mark, Node};
use kirjo::{RenderOptions, RichText, render, render_rich_text};

const BLOG_POST: &str = include_str!("../tests/fixtures/blog_post.json");

/// A long post: many paragraphs with marks, links and line breaks.
fn long_document(paragraphs: usize) -> Document {
    let content = (0..paragraphs)
        .map(|i| {
            Node::block(
                BlockKind::Paragraph,
                vec![
                    Node::text(format!("Kappale {i}\nrivi kaksi ")),
                    Node::marked("lihavoitu", vec![Mark::Bold, Mark::Italic]),
                    Node::block(
                        BlockKind::Hyperlink(kirjo::document::Link::uri(format!(
                            "https://example.com/blogi/{i}"
                        ))),
                        vec![Node::text("linkki")],
                    ),
                ],
            )
        })
        .collect();
    Document::with_content(content)
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_blog_post", |b| {
        b.iter(|| RichText::from_json(BLOG_POST).unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let rich_text = RichText::from_json(BLOG_POST).unwrap();
    let options = RenderOptions::new().with_base_url("https://example.com");

    c.bench_function("render_blog_post", |b| {
        b.iter(|| render_rich_text(&rich_text, &options));
    });

    c.bench_function("render_blog_post_to_xhtml", |b| {
        b.iter(|| render_rich_text(&rich_text, &options).to_xhtml());
    });

    let long = long_document(1_000);
    c.bench_function("render_1000_paragraphs", |b| {
        b.iter(|| render(&long, &[], &options));
    });
}

criterion_group!(benches, bench_decode, bench_render);
criterion_main!(benches);
