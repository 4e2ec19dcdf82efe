use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smarttemp_classifier::SmartTempEngine;
use smarttemp_core::config::{EngineConfig, ProfileConfig};
use smarttemp_encoder::HashingEncoder;

fn bench_analyze(c: &mut Criterion) {
    let engine = SmartTempEngine::with_encoder(
        &EngineConfig::default(),
        &ProfileConfig::default(),
        Box::new(HashingEncoder::new(384)),
    );
    let keyword = SmartTempEngine::keyword(&EngineConfig::default(), &ProfileConfig::default());
    let prompt = "Compare and contrast machine learning with traditional programming approaches";

    c.bench_function("analyze_hashing_384", |b| {
        b.iter(|| engine.analyze(black_box(prompt)))
    });
    c.bench_function("analyze_keyword", |b| {
        b.iter(|| keyword.analyze(black_box(prompt)))
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
