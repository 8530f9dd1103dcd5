//! Benchmarks for toolbar command dispatch.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markdraft::command::Command;
use markdraft::dispatch::apply;

fn draft() -> String {
    let mut md = String::from("# Draft\n\n");
    for i in 1..=200 {
        md.push_str(&format!("Paragraph {i} with some words to format.\n"));
    }
    md
}

fn bench_bold_word(c: &mut Criterion) {
    let md = draft();
    c.bench_function("bold_word", |b| {
        b.iter(|| apply(Command::Bold, black_box(&md), 9, 18).unwrap())
    });
}

fn bench_ordered_list_whole_draft(c: &mut Criterion) {
    let md = draft();
    let len = md.chars().count();
    c.bench_function("ordered_list_whole_draft", |b| {
        b.iter(|| apply(Command::OrderedList, black_box(&md), 0, len).unwrap())
    });
}

criterion_group!(benches, bench_bold_word, bench_ordered_list_whole_draft);
criterion_main!(benches);
