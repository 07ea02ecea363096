use tracing::{debug, warn};

use crate::core::SeriesId;
use crate::error::{ChartError, ChartResult};
use crate::extensions::InteractionEvent;
use crate::interaction::{ItemSelection, ItemTarget, LabelSelection, SelectInfo, SeriesSelection};
use crate::render::Renderer;

use super::{ClickArgs, InteractionEngine, PendingEmission};

pub(super) struct SelectionCoordinator;

impl SelectionCoordinator {
    pub(super) fn select_item_by_data<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        target: &ItemTarget,
    ) -> ChartResult<ItemSelection> {
        let selection = target
            .resolve(&engine.core.model.snapshot, engine.core.model.options.chart_type)
            .inspect_err(|err| warn!(error = %err, "item selection rejected"))?;
        engine.core.runtime.selected_item = Some(selection.clone());
        engine.emit_plugin_event(InteractionEvent::SelectedItemChanged {
            series_id: selection.series_id.clone(),
            data_index: selection.data_index,
        });
        Ok(selection)
    }

    /// Stores a new label list, truncated to the limit, with derived label
    /// texts and series values.
    pub(super) fn render_with_selected_labels<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        indices: &[usize],
    ) -> ChartResult<()> {
        let options = &engine.core.model.options;
        if !options.select_label.enabled {
            return Err(ChartError::InvalidSelection(
                "label selection is not enabled".to_owned(),
            ));
        }
        let selection = LabelSelection::derive(
            indices.iter().copied(),
            &engine.core.model.snapshot,
            options.select_label.policy(),
        );
        let data_index = selection.data_index.to_vec();
        engine.core.runtime.select_info = Some(SelectInfo::Label(selection));
        engine.emit_plugin_event(InteractionEvent::SelectedLabelsChanged { data_index });
        Ok(())
    }

    pub(super) fn render_with_selected_series<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        series_ids: &[SeriesId],
    ) -> ChartResult<()> {
        let options = &engine.core.model.options;
        if !options.select_series.enabled || options.select_label.enabled {
            return Err(ChartError::InvalidSelection(
                "series selection is not enabled".to_owned(),
            ));
        }
        let selection = SeriesSelection::derive(
            series_ids.iter().cloned(),
            &engine.core.model.snapshot,
            options.select_series.policy(),
        );
        let series_id = selection.series_id.to_vec();
        engine.core.runtime.select_info = Some(SelectInfo::Series(selection));
        engine.emit_plugin_event(InteractionEvent::SelectedSeriesChanged { series_id });
        Ok(())
    }

    /// Re-bases selected indices after a companion brush moved its start
    /// index from `prev_start` to `cur_start`.
    pub(super) fn shift_for_brush<R: Renderer>(
        engine: &mut InteractionEngine<R>,
        prev_start: Option<usize>,
        cur_start: usize,
    ) {
        let (Ok(prev), Ok(cur)) = (
            isize::try_from(prev_start.unwrap_or(0)),
            isize::try_from(cur_start),
        ) else {
            return;
        };
        let delta = prev - cur;
        if delta == 0 {
            return;
        }
        debug!(delta, "shifting selection for brush");

        let runtime = &mut engine.core.runtime;
        if let Some(SelectInfo::Label(selection)) = runtime.select_info.as_ref() {
            let shifted = selection.shifted(
                delta,
                &engine.core.model.snapshot,
                engine.core.model.options.select_label.policy(),
            );
            runtime.select_info = Some(SelectInfo::Label(shifted));
        }
        if let Some(item) = runtime.selected_item.take() {
            runtime.selected_item = match item.data_index {
                Some(index) => index.checked_add_signed(delta).map(|shifted| ItemSelection {
                    data_index: Some(shifted),
                    ..item
                }),
                None => Some(item),
            };
        }
    }

    /// Delivers every queued listener payload. Returns the number delivered.
    pub(super) fn deliver_after_render<R: Renderer>(engine: &mut InteractionEngine<R>) -> usize {
        let ready = engine.core.runtime.after_render.drain_ready();
        let delivered = ready.len();
        for emission in ready {
            match emission {
                PendingEmission::Click(args) => {
                    Self::report_click_selection(engine, &args);
                    if let Some(listener) = engine.core.runtime.listeners.click.as_mut() {
                        listener(&args);
                    }
                }
                PendingEmission::DblClick(args) => {
                    Self::report_item(engine, &args);
                    if let Some(listener) = engine.core.runtime.listeners.dbl_click.as_mut() {
                        listener(&args);
                    }
                }
                PendingEmission::DragSelect(args) => {
                    if let Some(listener) = engine.core.runtime.listeners.drag_select.as_mut() {
                        listener(&args);
                    }
                }
            }
        }
        delivered
    }

    fn report_click_selection<R: Renderer>(engine: &mut InteractionEngine<R>, args: &ClickArgs) {
        Self::report_item(engine, args);
        match args.selected.as_ref() {
            Some(SelectInfo::Label(selection)) => {
                engine.emit_plugin_event(InteractionEvent::SelectedLabelsChanged {
                    data_index: selection.data_index.to_vec(),
                });
            }
            Some(SelectInfo::Series(selection)) => {
                engine.emit_plugin_event(InteractionEvent::SelectedSeriesChanged {
                    series_id: selection.series_id.to_vec(),
                });
            }
            None => {}
        }
    }

    fn report_item<R: Renderer>(engine: &mut InteractionEngine<R>, args: &ClickArgs) {
        if args.label.is_none() {
            return;
        }
        let Some(series_id) = args.series_id.clone() else {
            return;
        };
        engine.emit_plugin_event(InteractionEvent::SelectedItemChanged {
            series_id,
            data_index: args.data_index,
        });
    }
}
