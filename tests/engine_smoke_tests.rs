use std::sync::Arc;

use chart_interact::ChartError;
use chart_interact::api::{InteractionEngine, InteractionEngineConfig, InteractionOptions, TooltipOptions};
use chart_interact::core::{
    AxisRange, AxisSteps, ChartSnapshot, ChartType, DataPoint, LabelOffset, NearestPointGeometry,
    PlotRect, SeriesEntry, SeriesId, series_list,
};
use chart_interact::interaction::{PointerEvent, SurfaceBounds};
use chart_interact::render::{CanvasLayerKind, Color, NullRenderer};

fn entry(id: &str, name: &str, color: Color, data: Vec<DataPoint>) -> SeriesEntry {
    SeriesEntry::new(id, name)
        .with_color(color)
        .with_data(data.clone())
        .with_geometry(Arc::new(NearestPointGeometry::new(data, 4.0)))
}

fn line_snapshot() -> ChartSnapshot {
    let sales = vec![
        DataPoint::xy(0.0, 5.0).with_pixel(100.0, 150.0),
        DataPoint::xy(1.0, 8.0).with_pixel(200.0, 120.0),
        DataPoint::xy(2.0, 1.0).with_pixel(300.0, 240.0),
    ];
    let costs = vec![
        DataPoint::xy(0.0, 3.0).with_pixel(100.0, 190.0),
        DataPoint::xy(1.0, 9.0).with_pixel(200.0, 90.0),
        DataPoint::xy(2.0, 2.0).with_pixel(300.0, 220.0),
    ];
    ChartSnapshot::new(
        series_list([
            entry("sales", "Sales", Color::rgb8(0x2E, 0x86, 0xDE), sales),
            entry("costs", "Costs", Color::rgb8(0xE8, 0x4A, 0x5F), costs),
        ]),
        PlotRect::new(0.0, 400.0, 0.0, 300.0),
    )
    .with_labels(vec!["Jan".to_owned(), "Feb".to_owned(), "Mar".to_owned()])
    .with_label_offset(LabelOffset {
        top: 10.0,
        right: 10.0,
        bottom: 30.0,
        left: 40.0,
    })
    .with_axes(AxisSteps::new(
        AxisRange::new(0.0, 100.0).expect("x axis"),
        AxisRange::new(0.0, 10.0).expect("y axis"),
    ))
}

fn engine_with(options: InteractionOptions) -> InteractionEngine<NullRenderer> {
    let config = InteractionEngineConfig::new(SurfaceBounds::new(0.0, 0.0, 400.0, 300.0))
        .with_options(options);
    let mut engine = InteractionEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_snapshot(line_snapshot());
    engine
}

#[test]
fn zero_sized_surface_is_rejected() {
    let config = InteractionEngineConfig::new(SurfaceBounds::new(0.0, 0.0, 0.0, 300.0));
    let result = InteractionEngine::new(NullRenderer::default(), config);
    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport { width: 0, height: 300 })
    ));
}

#[test]
fn hover_resolves_items_and_paints_both_layers() {
    let mut engine = engine_with(InteractionOptions::new(ChartType::Line));
    engine
        .pointer_move(PointerEvent::at(201.0, 121.0))
        .expect("hover");

    let hit_info = engine.hit_info().expect("hit info stored");
    assert_eq!(hit_info.items.len(), 2);
    assert_eq!(hit_info.hit_id, Some(SeriesId::new("sales")));

    let tooltip = engine.tooltip_state();
    assert!(tooltip.visible);
    let layout = tooltip.layout.as_ref().expect("layout");
    assert_eq!(layout.title.as_deref(), Some("Feb"));
    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].series_id, SeriesId::new("costs"));
    assert_eq!(layout.rows[1].series_id, SeriesId::new("sales"));
    assert!(layout.rows[1].hit);

    let overlay = engine.renderer().stats(CanvasLayerKind::Overlay);
    assert_eq!(overlay.circles, 2);
    assert_eq!(overlay.lines, 1);
    assert_eq!(overlay.rects, 0);

    let tooltip_layer = engine.renderer().stats(CanvasLayerKind::Tooltip);
    assert_eq!(tooltip_layer.passes, 1);
    assert_eq!(tooltip_layer.circles, 2);
    assert_eq!(tooltip_layer.rects, 1);
}

#[test]
fn pointer_leave_hides_tooltip_and_clears_overlay() {
    let mut engine = engine_with(InteractionOptions::new(ChartType::Line));
    engine
        .pointer_move(PointerEvent::at(201.0, 121.0))
        .expect("hover");
    engine.pointer_leave().expect("leave");

    assert!(!engine.tooltip_state().visible);
    assert!(engine.hit_info().is_none());
    assert!(engine.renderer().stats(CanvasLayerKind::Overlay).is_clear());
    assert!(engine.renderer().stats(CanvasLayerKind::Tooltip).is_clear());
}

#[test]
fn scatter_without_tooltip_block_keeps_tooltip_hidden() {
    let mut engine = engine_with(InteractionOptions::new(ChartType::Scatter));
    engine
        .pointer_move(PointerEvent::at(201.0, 121.0))
        .expect("hover");

    assert!(!engine.tooltip_state().visible);
    let overlay = engine.renderer().stats(CanvasLayerKind::Overlay);
    assert_eq!(overlay.circles, 0);
    assert_eq!(overlay.lines, 0);
}

#[test]
fn throttled_hover_runs_once_per_flush_with_latest_move() {
    let options = InteractionOptions::new(ChartType::Line).with_tooltip(TooltipOptions {
        throttled_move: true,
        ..TooltipOptions::default()
    });
    let mut engine = engine_with(options);

    engine
        .pointer_move(PointerEvent::at(101.0, 150.0))
        .expect("first move");
    engine
        .pointer_move(PointerEvent::at(299.0, 240.0))
        .expect("second move");
    assert!(engine.has_pending_hover());
    assert_eq!(engine.renderer().stats(CanvasLayerKind::Overlay).passes, 0);

    assert!(engine.flush_pending_hover().expect("flush"));
    assert!(!engine.has_pending_hover());
    assert_eq!(engine.renderer().stats(CanvasLayerKind::Overlay).passes, 1);
    let layout = engine.tooltip_state().layout.as_ref().expect("layout");
    assert_eq!(layout.title.as_deref(), Some("Mar"));

    assert!(!engine.flush_pending_hover().expect("idle flush"));
}

#[test]
fn wheel_is_ignored_without_scrollable_tooltip() {
    let mut engine = engine_with(InteractionOptions::new(ChartType::Line));
    engine
        .pointer_move(PointerEvent::at(201.0, 121.0))
        .expect("hover");
    assert!(!engine.wheel(PointerEvent::wheel(201.0, 121.0, 40.0)).expect("wheel"));

    let options = InteractionOptions::new(ChartType::Line).with_tooltip(TooltipOptions {
        use_scrollbar: true,
        ..TooltipOptions::default()
    });
    engine.set_options(options).expect("options");
    assert!(!engine.wheel(PointerEvent::wheel(201.0, 121.0, 40.0)).expect("hidden"));

    engine
        .pointer_move(PointerEvent::at(201.0, 121.0))
        .expect("hover");
    assert!(engine.wheel(PointerEvent::wheel(201.0, 121.0, 40.0)).expect("visible"));
    assert_eq!(engine.tooltip_state().scroll_top, 0.0);
}

#[test]
fn set_options_rejects_invalid_opacity_and_keeps_previous() {
    let mut engine = engine_with(InteractionOptions::new(ChartType::Line).with_title("Revenue"));
    let mut invalid = InteractionOptions::new(ChartType::Scatter);
    invalid.drag_selection.opacity = -0.5;

    assert!(engine.set_options(invalid).is_err());
    assert_eq!(engine.configured_options().chart_type, ChartType::Line);
    assert_eq!(engine.configured_options().title.text, "Revenue");
}

#[test]
fn surface_bounds_offset_maps_client_coordinates() {
    let config = InteractionEngineConfig::new(SurfaceBounds::new(50.0, 20.0, 400.0, 300.0));
    let mut engine = InteractionEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_snapshot(line_snapshot());

    engine
        .pointer_move(PointerEvent::at(251.0, 141.0))
        .expect("hover");
    let hit_info = engine.hit_info().expect("hit info");
    assert_eq!(hit_info.hit_id, Some(SeriesId::new("sales")));
    assert!(hit_info.items[&SeriesId::new("sales")].hit);
}
