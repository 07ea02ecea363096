use tracing::debug;

use crate::core::{ChartType, PixelPoint, SeriesId, format_with_thousands};
use crate::error::ChartResult;
use crate::interaction::{
    HitItem, ItemSelection, LabelSelection, PointerEvent, SelectInfo, SeriesSelection, map_pointer,
};
use crate::render::Renderer;

use super::hover_coordinator::HoverCoordinator;
use super::{ClickArgs, ClickMode, InteractionEngine, PendingEmission};

pub(super) struct ClickCoordinator;

impl ClickCoordinator {
    /// Routes a single click to the configured selection mode. Returns
    /// `false` when the click terminated a drag and was swallowed.
    pub(super) fn click<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<bool> {
        if engine.core.runtime.drag.take_click_swallow() {
            debug!("click after drag swallowed");
            return Ok(false);
        }

        let options = engine.core.model.effective_options();
        let point = map_pointer(event, engine.core.model.surface).point();
        let mut args = ClickArgs {
            event,
            ..ClickArgs::default()
        };

        match options.click_mode() {
            ClickMode::Item => {
                if let Some((series_id, item)) = Self::item_at(engine, point, false) {
                    Self::fill_item_args(engine, &mut args, series_id, &item);
                }
            }
            ClickMode::Label => {
                let snapshot = &engine.core.model.snapshot;
                let index = engine.core.presentation.label_locator.label_index_at(
                    point,
                    snapshot.plot_range(),
                    snapshot.labels.len(),
                    options.horizontal,
                );
                if let Some(index) = index {
                    let current = match engine.core.runtime.select_info.as_ref() {
                        Some(SelectInfo::Label(selection)) => selection.clone(),
                        _ => LabelSelection::default(),
                    };
                    let next = current.toggled(index, snapshot, options.select_label.policy());
                    engine.core.runtime.select_info = Some(SelectInfo::Label(next));
                }
                args.selected = engine.core.runtime.select_info.clone();
            }
            ClickMode::Series => {
                if let Some(series_id) = Self::series_id_at(engine, point) {
                    let current = match engine.core.runtime.select_info.as_ref() {
                        Some(SelectInfo::Series(selection)) => selection.clone(),
                        _ => SeriesSelection::default(),
                    };
                    let next = current.toggled(
                        series_id,
                        &engine.core.model.snapshot,
                        options.select_series.policy(),
                    );
                    engine.core.runtime.select_info = Some(SelectInfo::Series(next));
                }
                args.selected = engine.core.runtime.select_info.clone();
            }
            ClickMode::None => {}
        }

        if engine.core.runtime.drag.backup().is_none() {
            engine
                .core
                .runtime
                .after_render
                .schedule(PendingEmission::Click(args));
        }
        Ok(true)
    }

    /// Double-click always attempts item selection when it is enabled.
    pub(super) fn dbl_click<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        event: PointerEvent,
    ) -> ChartResult<()> {
        let select_item = engine.core.model.options.select_item;
        let mut args = ClickArgs {
            event,
            ..ClickArgs::default()
        };

        if select_item.enabled {
            let point = map_pointer(event, engine.core.model.surface).point();
            if let Some((series_id, item)) =
                Self::item_at(engine, point, select_item.use_approximate_value)
            {
                Self::fill_item_args(engine, &mut args, series_id, &item);
            }
        }

        engine
            .core
            .runtime
            .after_render
            .schedule(PendingEmission::DblClick(args));
        Ok(())
    }

    /// Item under `point`: the explicitly hit series, or with
    /// `approximate` the primary candidate even without a direct hit.
    fn item_at<R: Renderer>(
        engine: &InteractionEngine<R>,
        point: PixelPoint,
        approximate: bool,
    ) -> Option<(SeriesId, HitItem)> {
        let mut info = HoverCoordinator::resolve_hits(engine, point, false);
        let id = info.hit_id.take()?;
        let item = info.items.swap_remove(&id)?;
        (approximate || item.hit).then_some((id, item))
    }

    fn series_id_at<R: Renderer>(engine: &InteractionEngine<R>, point: PixelPoint) -> Option<SeriesId> {
        let info = HoverCoordinator::resolve_hits(engine, point, false);
        info.items
            .into_iter()
            .find_map(|(id, item)| item.hit.then_some(id))
    }

    fn fill_item_args<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        args: &mut ClickArgs,
        series_id: SeriesId,
        item: &HitItem,
    ) {
        let options = &engine.core.model.options;
        let data_index = if options.chart_type == ChartType::Pie {
            None
        } else {
            item.index
        };
        args.label = Some(Self::item_label(engine, item));
        args.value = Some(item.value);
        args.series_id = Some(series_id.clone());
        args.data_index = data_index;
        engine.core.runtime.selected_item = Some(ItemSelection {
            series_id,
            data_index,
        });
    }

    fn item_label<R: Renderer>(engine: &InteractionEngine<R>, item: &HitItem) -> String {
        let options = &engine.core.model.options;
        if options.chart_type == ChartType::Pie {
            return item.name.clone();
        }
        item.index
            .and_then(|index| engine.core.model.snapshot.labels.get(index))
            .cloned()
            .or_else(|| {
                item.data
                    .category(options.horizontal)
                    .map(format_with_thousands)
            })
            .unwrap_or_default()
    }
}
