//! Matcher benchmarks.
//!
//! Measures whole-file scans: matching the outermost bracket of a large
//! file walks every token once, which is the worst case for an editor
//! highlighting the brace under the caret.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::hint::black_box;

use brace_ir::{Language, TokenCursor, TokenStream};
use brace_lexer::lex_stream;
use brace_match::{
    Classifier, Direction, FileType, Matcher, StepLimit, TableRegistry, Unbounded,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// A Java class with `n` methods of nested blocks and calls.
fn generate_java(n: usize) -> String {
    let mut source = String::from("class Bench {\n");
    for i in 0..n {
        source.push_str(&format!(
            "    void m{i}(int[] a) {{\n        if (a[{i}] > 0) {{ call(a, (x) -> {{ return f(x[0]); }}); }}\n    }}\n"
        ));
    }
    source.push_str("}\n");
    source
}

/// An HTML document with `n` nested sections.
fn generate_html(n: usize) -> String {
    let mut source = String::from("<html><body>\n");
    for i in 0..n {
        source.push_str(&format!(
            "<div class=\"s{i}\"><p>text <b>{i}</b><br></p><!-- c --></div>\n"
        ));
    }
    source.push_str("</body></html>\n");
    source
}

fn bench_match_outermost(c: &mut Criterion) {
    let registry = TableRegistry::new();
    let mut group = c.benchmark_group("matcher/outermost");

    for size in [10, 100, 1000, 5000] {
        for (name, file_type, stream) in [
            ("java", FileType::JAVA, lex_stream(&generate_java(size), Language::Java)),
            ("html", FileType::HTML, lex_stream(&generate_html(size), Language::Html)),
        ] {
            let classifier = registry.classifier(&file_type);
            let open = first_open(&stream, &classifier);
            group.throughput(Throughput::Bytes(stream.text().len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &stream, |b, stream| {
                let matcher = Matcher::new(&classifier, stream.text());
                b.iter(|| {
                    let mut cursor = stream.cursor_at(open);
                    black_box(matcher.match_brace(&mut cursor, Direction::Forward, None, Unbounded))
                });
            });
        }
    }

    group.finish();
}

fn bench_structural_from_end(c: &mut Criterion) {
    let registry = TableRegistry::new();
    let classifier = registry.classifier(&FileType::JAVA);
    let mut group = c.benchmark_group("matcher/structural");

    for size in [100, 1000, 5000] {
        let stream = lex_stream(&generate_java(size), Language::Java);
        // the whitespace before the class's closing brace
        let last = stream.tokens().len() - 3;
        group.bench_with_input(BenchmarkId::from_parameter(size), &stream, |b, stream| {
            let matcher = Matcher::new(&classifier, stream.text());
            b.iter(|| {
                black_box(matcher.find_structural_left_brace(stream.cursor_at_index(last), Unbounded))
            });
        });
    }

    group.finish();
}

fn bench_step_limited_unbalanced(c: &mut Criterion) {
    let registry = TableRegistry::new();
    let classifier = registry.classifier(&FileType::JAVA);
    let source = format!("{{{}", generate_java(5000));
    let stream = lex_stream(&source, Language::Java);
    let matcher = Matcher::new(&classifier, stream.text());

    c.bench_function("matcher/unbalanced/limit_10k", |b| {
        b.iter(|| {
            let mut cursor = stream.cursor_at(0);
            black_box(matcher.match_brace(
                &mut cursor,
                Direction::Forward,
                None,
                StepLimit::new(10_000),
            ))
        });
    });
}

/// Offset of the first opening bracket in the stream.
fn first_open(stream: &TokenStream, classifier: &Classifier) -> u32 {
    let mut cursor = stream.cursor_at(0);
    while !classifier.is_open_token(cursor.kind()) {
        cursor.advance();
    }
    cursor.start()
}

criterion_group!(
    benches,
    bench_match_outermost,
    bench_structural_from_end,
    bench_step_limited_unbalanced
);
criterion_main!(benches);
