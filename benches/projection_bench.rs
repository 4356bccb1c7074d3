use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use report_charts::api::{RadarStyle, build_radar_frame};
use report_charts::core::{
    BarPoint, DonutLayout, GroupedBarLayout, PolarScale, RadarPoint, TimelinePoint, Viewport,
    project_donut_segments, project_grouped_bars, project_radar,
};
use report_charts::render::Color;

fn bench_radar_projection_64_axes(c: &mut Criterion) {
    let polar = PolarScale::fit(Viewport::new(800, 800), 0.8).expect("valid polar scale");
    let points: Vec<RadarPoint> = (0..64)
        .map(|i| RadarPoint::new(format!("axis-{i}"), f64::from(i % 6), 5.0))
        .collect();

    c.bench_function("radar_projection_64_axes", |b| {
        b.iter(|| {
            let _ = project_radar(black_box(&points), black_box(polar))
                .expect("projection should succeed");
        })
    });
}

fn bench_grouped_bar_projection_1k(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let points: Vec<BarPoint> = (0..1_000)
        .map(|i| {
            let current = f64::from(i % 40);
            BarPoint::new(format!("category-{i}"), current, current + 50.0)
        })
        .collect();

    c.bench_function("grouped_bar_projection_1k", |b| {
        b.iter(|| {
            let _ = project_grouped_bars(
                black_box(&points),
                black_box(viewport),
                black_box(GroupedBarLayout::default()),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_donut_projection_64_segments(c: &mut Criterion) {
    let polar = PolarScale::fit(Viewport::new(600, 600), 0.7).expect("valid polar scale");
    let points: Vec<TimelinePoint> = (0..64)
        .map(|i| {
            TimelinePoint::new(
                format!("segment-{i}"),
                f64::from(i % 9 + 1),
                Color::rgb8(30, 58, 138),
            )
        })
        .collect();

    c.bench_function("donut_projection_64_segments", |b| {
        b.iter(|| {
            let _ = project_donut_segments(
                black_box(&points),
                black_box(polar),
                black_box(DonutLayout::default()),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_radar_frame_build(c: &mut Criterion) {
    let viewport = Viewport::new(700, 350);
    let style = RadarStyle::default();
    let points: Vec<RadarPoint> = (0..12)
        .map(|i| RadarPoint::new(format!("axis-{i}"), f64::from(i % 6), 5.0))
        .collect();

    c.bench_function("radar_frame_build_12_axes", |b| {
        b.iter(|| {
            let _ = build_radar_frame(black_box(&points), black_box(viewport), black_box(&style))
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_radar_projection_64_axes,
    bench_grouped_bar_projection_1k,
    bench_donut_projection_64_segments,
    bench_radar_frame_build
);
criterion_main!(benches);
