// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use understory_pan::{
    Directions, DismissThreshold, PanSample, TranslationOptions, clamp_translation,
    evaluate_dismiss,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64 / (1_u64 << 53) as f64) * 2.0 - 1.0
    }

    fn vec2(&mut self, scale: f64) -> Vec2 {
        Vec2::new(self.next_f64() * scale, self.next_f64() * scale)
    }
}

fn samples(len: usize, seed: u64) -> Vec<(PanSample, Vec2)> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|_| {
            let sample = PanSample::new(rng.vec2(400.0), rng.vec2(2_000.0));
            (sample, rng.vec2(400.0))
        })
        .collect()
}

fn bench_clamp_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan/clamp_translation");
    let input = samples(4_096, 7);
    group.throughput(Throughput::Elements(input.len() as u64));

    for (name, directions) in [
        ("all", Directions::ALL),
        ("down", Directions::DOWN),
        ("horizontal", Directions::HORIZONTAL),
    ] {
        for lock in [false, true] {
            let id = format!("{name}/lock={lock}");
            group.bench_function(id, |b| {
                b.iter(|| {
                    for (sample, current) in &input {
                        let options = TranslationOptions::new(*current).with_direction_lock(lock);
                        black_box(clamp_translation(
                            sample.translation,
                            *current,
                            directions,
                            options,
                        ));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_evaluate_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan/evaluate_dismiss");
    let input = samples(4_096, 11);
    let threshold = DismissThreshold::for_screen(Size::new(400.0, 800.0));
    group.throughput(Throughput::Elements(input.len() as u64));

    group.bench_function("all", |b| {
        b.iter(|| {
            for (sample, current) in &input {
                black_box(evaluate_dismiss(
                    *sample,
                    Directions::ALL,
                    TranslationOptions::new(*current),
                    threshold,
                ));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_clamp_translation, bench_evaluate_dismiss);
criterion_main!(benches);
