use std::hint::black_box;
use std::sync::Arc;

use chart_interact::api::{InteractionEngine, InteractionEngineConfig, InteractionOptions};
use chart_interact::core::{
    AxisRange, AxisSteps, ChartSnapshot, ChartType, DataPoint, DragRect, NearestPointGeometry,
    PixelPoint, PlotRect, SeriesEntry, SeriesList, series_list,
};
use chart_interact::interaction::{
    EstimatedTextMeasurer, HitTestContext, PointerEvent, SurfaceBounds, TooltipFormatter,
    find_hit_item, pixel_range_to_data_range,
};
use chart_interact::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};

fn generated_series(series: usize, points: usize) -> SeriesList {
    series_list((0..series).map(|s| {
        let data: Vec<DataPoint> = (0..points)
            .map(|i| {
                let x = i as f64;
                let y = 50.0 + ((i * 7 + s * 13) % 100) as f64;
                DataPoint::xy(x, y).with_pixel(40.0 + x * 1.5, 400.0 - y * 3.0)
            })
            .collect();
        SeriesEntry::new(format!("s{s}"), format!("Series {s}"))
            .with_data(data.clone())
            .with_geometry(Arc::new(NearestPointGeometry::new(data, 4.0)))
    }))
}

fn bench_hit_test_8x1k(c: &mut Criterion) {
    let series = generated_series(8, 1_000);
    let formatter = TooltipFormatter::new(ChartType::Line, false);
    let measurer = EstimatedTextMeasurer::default();

    c.bench_function("hit_test_8x1k", |b| {
        b.iter(|| {
            let ctx = HitTestContext {
                formatter: &formatter,
                measurer: &measurer,
            };
            let _ = find_hit_item(black_box(&series), black_box(PixelPoint::new(777.0, 200.0)), ctx);
        })
    });
}

fn bench_range_translation(c: &mut Criterion) {
    let plot = PlotRect::new(40.0, 1_540.0, 10.0, 410.0);
    let axes = AxisSteps::new(
        AxisRange::new(0.0, 1_000.0).expect("valid x axis"),
        AxisRange::new(0.0, 200.0).expect("valid y axis"),
    );

    c.bench_function("range_translation", |b| {
        b.iter(|| {
            let _ = pixel_range_to_data_range(
                black_box(DragRect::new(321.5, 10.0, 640.25, 400.0)),
                black_box(plot),
                black_box(&axes),
            )
            .expect("range");
        })
    });
}

fn bench_engine_hover_pass(c: &mut Criterion) {
    let config = InteractionEngineConfig::new(SurfaceBounds::new(0.0, 0.0, 1_600.0, 450.0))
        .with_options(InteractionOptions::new(ChartType::Line));
    let mut engine = InteractionEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_snapshot(ChartSnapshot::new(
        generated_series(8, 1_000),
        PlotRect::new(0.0, 1_600.0, 0.0, 450.0),
    ));

    c.bench_function("engine_hover_pass_8x1k", |b| {
        b.iter(|| {
            engine
                .pointer_move(black_box(PointerEvent::at(777.0, 200.0)))
                .expect("hover pass");
        })
    });
}

criterion_group!(
    benches,
    bench_hit_test_8x1k,
    bench_range_translation,
    bench_engine_hover_pass
);
criterion_main!(benches);
