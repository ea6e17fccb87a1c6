use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gs_scrubber::{inspect, ScrubConfig, Scrubber};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ARTIFACTS: &[&str] = &[
    "\u{200B}", "\u{FEFF}", "\u{00A0}", "\u{2014}", "\u{2026}",
    "\u{201C}", "\u{201D}", "\u{00AD}", "\u{0007}", "\u{1F600}",
];

fn generate_text(size_kb: usize) -> String {
    let base = "The quick brown fox jumps over the lazy dog while the scrubber hunts for \
artifacts in generated prose. Realistic content mixes plain sentences with the \
occasional pasted heading, list item, and code identifier. ";
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
        if rng.gen_bool(0.6) {
            text.push_str(ARTIFACTS[rng.gen_range(0..ARTIFACTS.len())]);
        }
    }
    text
}

fn bench_clean(c: &mut Criterion) {
    for (kb, label) in [(1usize, "1kb"), (10, "10kb"), (100, "100kb")] {
        let text = generate_text(kb);
        for name in ["standard", "strict", "lenient"] {
            let scrubber = Scrubber::with_preset(name).unwrap();
            c.bench_function(&format!("clean_{name}_{label}"), |b| {
                b.iter(|| black_box(scrubber.clean(black_box(&text))))
            });
        }
    }
}

fn bench_inspect(c: &mut Criterion) {
    let text = generate_text(10);
    let config = ScrubConfig::default();
    c.bench_function("inspect_standard_10kb", |b| {
        b.iter(|| black_box(inspect(black_box(&text), &config)))
    });
}

criterion_group!(benches, bench_clean, bench_inspect);
criterion_main!(benches);
