//! Theme loading and path query benchmarks for td_theme.
//!
//! Run with: `cargo bench -p td_theme`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use td_test_utils::fixtures::DEFAULT_THEME_JSON;
use td_theme::config::LoaderConfig;
use td_theme::layout::{HudLayout, LevelPickerLayout};
use td_theme::loader::ThemeLoader;

fn loader() -> ThemeLoader {
    ThemeLoader::new(LoaderConfig {
        verify_assets: false,
        ..LoaderConfig::default()
    })
}

/// Parsing, checking and typing the default theme.
pub fn load_benchmark(c: &mut Criterion) {
    let loader = loader();
    c.bench_function("load_default_theme", |b| {
        b.iter(|| {
            loader
                .load_from_str("default", "themes/default", black_box(DEFAULT_THEME_JSON))
                .unwrap()
        })
    });
}

/// Path lookups the HUD performs on every reset.
pub fn query_benchmark(c: &mut Criterion) {
    let theme = loader()
        .load_from_str("default", "themes/default", DEFAULT_THEME_JSON)
        .unwrap();
    let doc = theme.document();

    c.bench_function("query_tower_buttons", |b| {
        b.iter(|| {
            let count = doc.array_len("tower-buttons", None).unwrap();
            for i in 0..count {
                black_box(doc.position("tower-buttons[]/position", Some(i)).unwrap());
                black_box(doc.int("tower-buttons[]/tower", Some(i)).unwrap());
            }
        })
    });

    c.bench_function("layout_level_picker_20", |b| {
        b.iter(|| {
            black_box(HudLayout::from_theme(theme.data()));
            black_box(LevelPickerLayout::new(
                &theme.data().level_picker,
                20,
                true,
                Some(7),
            ))
        })
    });
}

criterion_group!(benches, load_benchmark, query_benchmark);
criterion_main!(benches);
