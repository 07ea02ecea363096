use std::sync::{Arc, Mutex};

use chart_interact::api::{InteractionEngine, InteractionEngineConfig, InteractionOptions, TooltipOptions};
use chart_interact::core::{
    ChartSnapshot, ChartType, DataPoint, NearestPointGeometry, PlotRect, SeriesEntry, series_list,
};
use chart_interact::interaction::{
    HEAT_MAP_ERROR_TEXT, HeatMapCellValue, PointerEvent, SurfaceBounds, TooltipFormatArgs,
    TooltipValueFormatter,
};
use chart_interact::render::{CanvasLayerKind, NullRenderer};

fn engine_with(options: InteractionOptions, snapshot: ChartSnapshot) -> InteractionEngine<NullRenderer> {
    let config = InteractionEngineConfig::new(SurfaceBounds::new(0.0, 0.0, 600.0, 300.0))
        .with_options(options);
    let mut engine = InteractionEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_snapshot(snapshot);
    engine
}

fn heat_map_snapshot() -> ChartSnapshot {
    let cells = vec![
        DataPoint::xy(1.0, 2.0).with_aggregate(-1.0).with_pixel(100.0, 100.0),
        DataPoint::xy(2.0, 2.0).with_aggregate(5.0).with_pixel(200.0, 100.0),
    ];
    ChartSnapshot::new(
        series_list([SeriesEntry::new("heat", "Heat")
            .with_data(cells.clone())
            .with_geometry(Arc::new(NearestPointGeometry::new(cells, 10.0)))]),
        PlotRect::new(0.0, 600.0, 0.0, 300.0),
    )
}

#[test]
fn heat_map_error_cell_overrides_user_formatter() {
    let options = InteractionOptions::new(ChartType::HeatMap).with_tooltip(TooltipOptions::default());
    let mut engine = engine_with(options, heat_map_snapshot());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let user: TooltipValueFormatter = Arc::new(move |args: &TooltipFormatArgs<'_>| -> Option<String> {
        if let TooltipFormatArgs::HeatMap { value, .. } = *args {
            sink.lock().expect("sink").push(value);
        }
        Some("custom".to_owned())
    });
    engine.set_tooltip_formatter(Some(user));

    engine
        .pointer_move(PointerEvent::at(101.0, 101.0))
        .expect("hover error cell");
    let layout = engine.tooltip_state().layout.clone().expect("layout");
    assert_eq!(layout.title.as_deref(), Some("1, 2"));
    assert_eq!(layout.rows.len(), 1);
    assert_eq!(layout.rows[0].value_text, HEAT_MAP_ERROR_TEXT);

    engine
        .pointer_move(PointerEvent::at(199.0, 99.0))
        .expect("hover value cell");
    let layout = engine.tooltip_state().layout.clone().expect("layout");
    assert_eq!(layout.rows[0].value_text, "custom");

    let seen = seen.lock().expect("seen");
    assert_eq!(
        seen.as_slice(),
        &[HeatMapCellValue::Error, HeatMapCellValue::Value(5.0)]
    );
}

#[test]
fn heat_map_without_tooltip_block_shows_nothing() {
    let mut engine = engine_with(InteractionOptions::new(ChartType::HeatMap), heat_map_snapshot());
    engine
        .pointer_move(PointerEvent::at(101.0, 101.0))
        .expect("hover");
    assert!(!engine.tooltip_state().visible);
    assert!(engine.renderer().stats(CanvasLayerKind::Tooltip).is_clear());
}

#[test]
fn scatter_tooltip_shows_point_under_series_name() {
    let points = vec![DataPoint::xy(1_200.0, 35.5).with_pixel(150.0, 80.0)];
    let snapshot = ChartSnapshot::new(
        series_list([SeriesEntry::new("dots", "Dots")
            .with_data(points.clone())
            .with_geometry(Arc::new(NearestPointGeometry::new(points, 5.0)))]),
        PlotRect::new(0.0, 600.0, 0.0, 300.0),
    );
    let options = InteractionOptions::new(ChartType::Scatter).with_tooltip(TooltipOptions::default());
    let mut engine = engine_with(options, snapshot);

    engine
        .pointer_move(PointerEvent::at(151.0, 81.0))
        .expect("hover");
    let layout = engine.tooltip_state().layout.clone().expect("layout");
    assert_eq!(layout.title.as_deref(), Some("Dots"));
    assert_eq!(layout.rows[0].value_text, "1,200, 35.5");
}

fn stacked_rows_snapshot(rows: usize) -> ChartSnapshot {
    let entries = (0..rows).map(|index| {
        let data = vec![DataPoint::xy(0.0, index as f64).with_pixel(100.0, 20.0 + index as f64)];
        SeriesEntry::new(format!("s{index}"), format!("Series {index}"))
            .with_data(data.clone())
            .with_geometry(Arc::new(NearestPointGeometry::new(data, 2.0)))
    });
    ChartSnapshot::new(series_list(entries), PlotRect::new(0.0, 600.0, 0.0, 300.0))
        .with_labels(vec!["Only".to_owned()])
}

#[test]
fn wheel_scrolls_overflowing_tooltip_within_bounds() {
    let options = InteractionOptions::new(ChartType::Line).with_tooltip(TooltipOptions {
        use_scrollbar: true,
        ..TooltipOptions::default()
    });
    let mut engine = engine_with(options, stacked_rows_snapshot(12));

    engine
        .pointer_move(PointerEvent::at(100.0, 20.0))
        .expect("hover");
    let layout = engine.tooltip_state().layout.clone().expect("layout");
    assert_eq!(layout.rows.len(), 12);
    assert!(layout.is_scrollable());
    assert_eq!(layout.max_scroll(), 40.0);
    let passes = engine.renderer().stats(CanvasLayerKind::Tooltip).passes;

    assert!(engine.wheel(PointerEvent::wheel(100.0, 20.0, 30.0)).expect("wheel"));
    assert_eq!(engine.tooltip_state().scroll_top, 30.0);
    assert_eq!(engine.renderer().stats(CanvasLayerKind::Tooltip).passes, passes + 1);

    assert!(engine.wheel(PointerEvent::wheel(100.0, 20.0, 1_000.0)).expect("wheel"));
    assert_eq!(engine.tooltip_state().scroll_top, 40.0);

    engine
        .pointer_move(PointerEvent::at(101.0, 20.0))
        .expect("same rows");
    assert_eq!(engine.tooltip_state().scroll_top, 40.0);
}

#[test]
fn show_all_values_adds_rows_for_series_without_geometry() {
    let line = vec![DataPoint::xy(3.0, 8.0).with_pixel(100.0, 50.0)];
    let snapshot = ChartSnapshot::new(
        series_list([
            SeriesEntry::new("line", "Line")
                .with_data(line.clone())
                .with_geometry(Arc::new(NearestPointGeometry::new(line, 4.0))),
            SeriesEntry::new("band", "Band")
                .with_data(vec![DataPoint::xy(2.0, 1.0), DataPoint::xy(3.0, 2.5)]),
        ]),
        PlotRect::new(0.0, 600.0, 0.0, 300.0),
    );

    let plain = InteractionOptions::new(ChartType::Line);
    let mut engine = engine_with(plain, snapshot.clone());
    engine
        .pointer_move(PointerEvent::at(100.0, 50.0))
        .expect("hover");
    assert_eq!(engine.tooltip_state().layout.as_ref().map(|l| l.rows.len()), Some(1));

    let all = InteractionOptions::new(ChartType::Line).with_tooltip(TooltipOptions {
        show_all_value_in_range: true,
        ..TooltipOptions::default()
    });
    let mut engine = engine_with(all, snapshot);
    engine
        .pointer_move(PointerEvent::at(100.0, 50.0))
        .expect("hover");
    let layout = engine.tooltip_state().layout.clone().expect("layout");
    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.title.as_deref(), Some("3"));
    assert_eq!(layout.rows[0].value_text, "8");
    assert_eq!(layout.rows[1].value_text, "2.5");
    assert!(!layout.rows[1].hit);
}
