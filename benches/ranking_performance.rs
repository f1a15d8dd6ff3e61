//! Performance benchmarks for ranking and score editing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use medal_table::editor::{NoOpScoreSink, ScoreEntryEditor};
use medal_table::ranking::rank;
use medal_table::types::{ScoreEntry, ScoringDirection};
use std::sync::Arc;

fn bench_division(size: usize) -> Vec<ScoreEntry> {
    (0..size)
        .map(|i| {
            // Every seventh competitor unscored, every fifth tied with a neighbour
            let score = match i % 7 {
                0 => None,
                _ => Some(((i / 5) as f64) * 0.25 + 1.0),
            };
            ScoreEntry::new(format!("child_{}", i), format!("Child {}", i), 8)
                .with_division("bench_game", "mottu")
                .with_raw_score(score)
        })
        .collect()
}

fn bench_rank_division(c: &mut Criterion) {
    let small = bench_division(12);
    let large = bench_division(200);

    c.bench_function("rank_12_entries_time", |b| {
        b.iter(|| black_box(rank(&small, ScoringDirection::LowerIsBetter)))
    });

    c.bench_function("rank_200_entries_points", |b| {
        b.iter(|| black_box(rank(&large, ScoringDirection::HigherIsBetter)))
    });
}

fn bench_editor_submit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("editor_submit_score_40_entries", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut editor = ScoreEntryEditor::new(
                    bench_division(40),
                    ScoringDirection::HigherIsBetter,
                    true,
                    Arc::new(NoOpScoreSink),
                );

                if let Some(save) = editor.submit_score("child_7", "42.5") {
                    let _ = save.outcome().await;
                }

                black_box(editor.rows())
            })
        })
    });
}

criterion_group!(benches, bench_rank_division, bench_editor_submit);
criterion_main!(benches);
