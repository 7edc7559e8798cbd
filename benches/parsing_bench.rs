use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphone::{Config, LibPhoneNumberEngine, PhoneUtil};

// (raw number, region hints)
type TestEntity = (&'static str, &'static [&'static str]);

const NUMBERS: &[TestEntity] = &[
    // Resolved by the configured default
    ("0715333777", &[]),
    // International form, region comes from the number itself
    ("+255 715 333 777", &[]),
    // First hint is invalid, second one matches
    ("0714969698", &["US", "KE"]),
    // Unsupported hint skipped silently
    ("0715333777", &["TTT"]),
    // Valid nowhere, every candidate is tried
    ("12345", &["US", "KE", "UG"]),
];

fn parsing_benchmark(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let util = PhoneUtil::new(
        LibPhoneNumberEngine::new(),
        Config::new().with_default_region_code("TZ"),
    );

    let mut group = c.benchmark_group("Multi-region parsing");

    group.bench_function("parse_phone_number()", |b| {
        b.iter(|| {
            for (raw, hints) in NUMBERS {
                let _ = util.parse_phone_number(black_box(raw), black_box(hints.iter()));
            }
        })
    });

    group.bench_function("to_e164()", |b| {
        b.iter(|| {
            for (raw, hints) in NUMBERS {
                let _ = util.to_e164_str(black_box(raw), black_box(hints.first().copied()));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
