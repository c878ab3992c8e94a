// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Line;
use rand::SeedableRng;
use rand::rngs::StdRng;
use understory_clip::{ClipWindow, clip, clip_all};
use understory_clip_scene::{RandomConfig, random_segment};

fn segments(len: usize) -> Vec<Line> {
    let mut rng = StdRng::seed_from_u64(0xC11F);
    let config = RandomConfig::default();
    (0..len).map(|_| random_segment(&mut rng, &config)).collect()
}

fn bench_clip_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip/single");
    let window = ClipWindow::default();

    // One case per code path: trivial accept, trivial reject, and a crossing
    // segment that needs both endpoints moved.
    let cases = [
        ("inside", Line::new((-1.0, -1.0), (2.0, 3.0))),
        ("outside", Line::new((6.0, 6.0), (9.0, 8.0))),
        ("crossing", Line::new((-9.0, -7.0), (8.0, 9.0))),
    ];
    for (name, segment) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(clip(black_box(segment), &window)));
        });
    }
    group.finish();
}

fn bench_clip_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip/all");
    let window = ClipWindow::default();

    for len in [16usize, 256, 4_096] {
        let input = segments(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| {
                let accepted = clip_all(input.iter().copied(), &window)
                    .filter(|(_, result)| result.is_accepted())
                    .count();
                black_box(accepted);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clip_single, bench_clip_all);
criterion_main!(benches);
