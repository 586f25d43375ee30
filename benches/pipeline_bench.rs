use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use notam_processor::app::services::datetime_normalizer::DateTimeNormalizer;
use notam_processor::app::services::notam_parser::extract;
use notam_processor::{NotamInput, NotamProcessor, ProcessorConfig, Source};

const SAMPLE_NOTAMS: &[&str] = &[
    "A1234/25 NOTAMN\nQ) KZNY/QMRLC/IV/NBO/A/000/999/4038N07347W005\nA) KJFK B) 2412150000 C) 2502282359\nE) RWY 04L/22R CLSD",
    "A1235/25 NOTAMC A1234/25\nQ) KZNY/QMRLC/IV/M/A/000/999/4038N07347W005\nA) KJFK B) 2501010000 C) 2501312359 E) RWY 04L/22R CLSD",
    "A0567/25 NOTAMN\nQ) CZYZ/QMXLC/IV/M/A/000/999/4341N07937W005\nA) CYYZ\nB) 2503011200\nC) 2503152359EST\nE) TWY A BTN TWY B AND TWY C CLSD",
    "A0568/25 NOTAMN\nA) CYYZ B) 2503011200 C) PERM\nE) ILS RWY 05 U/S",
    "!JFK 01/001 JFK RWY 4L/22R CLSD 2501010000-2501312359",
];

fn sample_batch(size: usize) -> Vec<NotamInput> {
    (0..size)
        .map(|i| {
            let raw = SAMPLE_NOTAMS[i % SAMPLE_NOTAMS.len()];
            NotamInput::new(raw, Source::Faa).with_id(format!("bench-{}", i))
        })
        .collect()
}

/// Benchmark field extraction per NOTAM shape
fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for (index, raw) in SAMPLE_NOTAMS.iter().enumerate() {
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(index), raw, |b, raw| {
            b.iter(|| {
                let _ = extract(black_box(raw));
            });
        });
    }

    group.finish();
}

/// Benchmark date token normalization
fn bench_normalize_dates(c: &mut Criterion) {
    let normalizer = DateTimeNormalizer::default();
    let mut group = c.benchmark_group("normalize_date");

    for token in ["2501312359", "2503152359EST", "2025-01-31T23:59:00Z", "PERM", "2502301200"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, token| {
            b.iter(|| normalizer.normalize(black_box(token)));
        });
    }

    group.finish();
}

/// Benchmark the full batch pipeline at increasing sizes
fn bench_process_batch(c: &mut Criterion) {
    let processor = NotamProcessor::new(ProcessorConfig::default());
    let mut group = c.benchmark_group("process_batch");

    for size in [10usize, 100, 1000] {
        let batch = sample_batch(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| processor.process_batch(black_box(batch.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extract, bench_normalize_dates, bench_process_batch);
criterion_main!(benches);
