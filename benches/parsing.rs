//! Performance benchmarks for textmarkup
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use textmarkup::{Mode, Options};

/// Sample documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, <world>!";

    pub const SMALL: &str = r#"SMALL NOTE
==========

This is a paragraph with <emphasis> and "quoted" text & more.

- Item 1
- Item 2
- Item 3
"#;

    pub const MEDIUM: &str = r#"PROJECT NOTES
=============

These notes describe how the build works and what to watch out for.

SETUP
-----

Install the toolchain first:
$ rustup update stable
$ cargo build --release

- Fast conversion
- Single pass
-?Streaming output
 keeps memory flat

Usage
=====

Pipe a file through the converter and paste the <stringified> output
into your source code.
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
Section Title
-------------

This paragraph contains various inline elements like <emphasis>, "quotes",
ampersands & such, and a < lone bracket.

- First bullet point with <italic> text
- Second bullet point
-?Third point
 with a continuation line

$ run --this command

Another paragraph to add some content. This helps test the converter's
ability to handle longer documents efficiently.
"#;
        section.repeat(50)
    }

    /// Long lines packed with emphasis markers
    pub fn emphasis_heavy() -> String {
        "<abc> x<y>z <<<>>> ".repeat(1000)
    }
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    group.throughput(Throughput::Bytes(samples::TINY.len() as u64));
    group.bench_function("tiny", |b| {
        b.iter(|| textmarkup::to_markup(black_box(samples::TINY)))
    });

    group.throughput(Throughput::Bytes(samples::SMALL.len() as u64));
    group.bench_function("small", |b| {
        b.iter(|| textmarkup::to_markup(black_box(samples::SMALL)))
    });

    group.throughput(Throughput::Bytes(samples::MEDIUM.len() as u64));
    group.bench_function("medium", |b| {
        b.iter(|| textmarkup::to_markup(black_box(samples::MEDIUM)))
    });

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| {
        b.iter(|| textmarkup::to_markup(black_box(&large)))
    });

    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    for (name, mode, stringify) in [
        ("html", Mode::Html, false),
        ("qml", Mode::Qml, false),
        ("html_stringify", Mode::Html, true),
    ] {
        let options = Options { mode, stringify };
        group.bench_function(name, |b| {
            b.iter(|| textmarkup::to_markup_with_options(black_box(&large), &options))
        });
    }

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    // Plain text (no rewriting needed)
    let plain = "Hello, this is plain text without any special characters. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(plain.len());
            textmarkup::inline::transform_line_into(&mut out, black_box(&plain));
            out
        })
    });

    let heavy = samples::emphasis_heavy();
    group.throughput(Throughput::Bytes(heavy.len() as u64));
    group.bench_function("emphasis_heavy", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(heavy.len() * 2);
            textmarkup::inline::transform_line_into(&mut out, black_box(&heavy));
            out
        })
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("convert_reader", |b| {
        let mut sink = Vec::with_capacity(large.len() * 2);
        b.iter(|| {
            sink.clear();
            textmarkup::convert(black_box(large.as_bytes()), &mut sink, &Options::default())
                .unwrap();
            black_box(&sink);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_modes, bench_inline, bench_streaming);
criterion_main!(benches);
