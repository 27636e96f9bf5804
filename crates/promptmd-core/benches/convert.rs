//! Benchmarks for node tree → prompt text conversion.
//! Run with: cargo bench -p promptmd-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use promptmd_core::components::{context, example, examples, instructions};
use promptmd_core::elements::{code, h1, li, p, pre_lang, strong, ul};
use promptmd_core::{convert, nodes, Node};

fn system_prompt() -> Node {
    nodes![
        h1("System Prompt"),
        context(p(nodes!["You are a ", strong("careful"), " reviewer."])),
        instructions(ul(nodes![li("Be concise"), "\n", li("Be accurate"), "\n", li("Cite sources")])),
        pre_lang("rust", "fn main() {\n    println!(\"hi\");\n}"),
    ]
}

/// Small prompt: a handful of blocks, one composite layer.
fn bench_convert_small(c: &mut Criterion) {
    let tree = system_prompt();
    c.bench_function("convert_small_tree", |b| {
        b.iter(|| {
            let _ = black_box(convert(black_box(&tree)).unwrap());
        })
    });
}

/// Large synthetic prompt: hundreds of examples, each with nested inline markup.
fn bench_convert_large(c: &mut Criterion) {
    let tree = examples(
        (0..500)
            .map(|i| {
                example(nodes![
                    p(nodes!["Input ", i, ": call ", code("lookup(<id>)"), " then answer."]),
                    ul(nodes![li(format!("step {i}.1")), li(format!("step {i}.2"))]),
                ])
            })
            .collect::<Node>(),
    );
    c.bench_function("convert_large_tree", |b| {
        b.iter(|| {
            let _ = black_box(convert(black_box(&tree)).unwrap());
        })
    });
}

/// Deeply nested fragments to measure flattening overhead.
fn bench_convert_deep_fragments(c: &mut Criterion) {
    let mut tree = p("leaf");
    for _ in 0..200 {
        tree = Node::fragment(vec![tree, p("sibling")]);
    }
    c.bench_function("convert_deep_fragments", |b| {
        b.iter(|| {
            let _ = black_box(convert(black_box(&tree)).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_convert_small,
    bench_convert_large,
    bench_convert_deep_fragments
);
criterion_main!(benches);
