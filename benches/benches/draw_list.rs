// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use understory_clip_scene::{DrawList, RandomConfig, Scene};
use understory_clip_view::{Viewport, ZoomDirection};

fn bench_draw_list_by_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_list/scale");

    let mut scene = Scene::new();
    let mut rng = StdRng::seed_from_u64(42);
    let config = RandomConfig {
        segment_count: 64,
        ..RandomConfig::default()
    };
    scene.randomize_segments(&mut rng, &config);

    // Grid line count grows as the scale shrinks, so the min scale is the
    // expensive end.
    for scale in [5.0_f64, 20.0, 50.0] {
        let mut view = Viewport::new(Size::new(1920.0, 1080.0));
        view.set_scale(scale);
        group.bench_with_input(BenchmarkId::from_parameter(scale), &view, |b, view| {
            b.iter(|| black_box(DrawList::build(&scene, view)));
        });
    }
    group.finish();
}

fn bench_wheel_then_rebuild(c: &mut Criterion) {
    c.bench_function("draw_list/zoom_and_rebuild", |b| {
        let scene = Scene::new();
        let mut view = Viewport::new(Size::new(800.0, 600.0));
        let anchor = Point::new(613.0, 127.0);
        let mut direction = ZoomDirection::In;
        b.iter(|| {
            if !view.zoom_at(anchor, direction) {
                direction = match direction {
                    ZoomDirection::In => ZoomDirection::Out,
                    ZoomDirection::Out => ZoomDirection::In,
                };
            }
            black_box(DrawList::build(&scene, &view));
        });
    });
}

criterion_group!(benches, bench_draw_list_by_scale, bench_wheel_then_rebuild);
criterion_main!(benches);
