use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::{Array, SmallVec};

use crate::core::{ChartSnapshot, ChartType, DataPoint, SeriesId};
use crate::error::{ChartError, ChartResult};

pub type SelectedIndices = SmallVec<[usize; 4]>;
pub type SelectedSeriesIds = SmallVec<[SeriesId; 4]>;

/// What happens when a toggle pushes a selection past its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    DropOldest,
    #[default]
    RejectNewest,
}

impl OverflowPolicy {
    #[must_use]
    pub fn from_deselect_overflow(use_deselect_overflow: bool) -> Self {
        if use_deselect_overflow {
            Self::DropOldest
        } else {
            Self::RejectNewest
        }
    }
}

/// Cap and overflow rule of one selection mode. A `limit` of 0 is unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionPolicy {
    pub limit: usize,
    pub overflow: OverflowPolicy,
}

impl SelectionPolicy {
    #[must_use]
    pub fn new(limit: usize, overflow: OverflowPolicy) -> Self {
        Self { limit, overflow }
    }

    /// Copy-on-write toggle.
    ///
    /// A selected value is removed; an absent value is appended only when
    /// `addable`, after which the limit is enforced.
    #[must_use]
    pub fn toggle<A>(&self, current: &SmallVec<A>, value: A::Item, addable: bool) -> SmallVec<A>
    where
        A: Array,
        A::Item: Clone + PartialEq,
    {
        let mut next = current.clone();
        if let Some(position) = next.iter().position(|selected| *selected == value) {
            next.remove(position);
            return next;
        }
        if !addable {
            return next;
        }

        next.push(value);
        if self.limit > 0 && next.len() > self.limit {
            match self.overflow {
                OverflowPolicy::DropOldest => {
                    next.remove(0);
                }
                OverflowPolicy::RejectNewest => {
                    next.pop();
                }
            }
        }
        next
    }

    fn truncate<A: Array>(&self, values: &mut SmallVec<A>) {
        if self.limit > 0 {
            values.truncate(self.limit);
        }
    }
}

/// Selected label indices together with their derived label text and
/// per-series data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelSelection {
    pub data_index: SelectedIndices,
    pub label: Vec<String>,
    pub data: Vec<IndexMap<SeriesId, DataPoint>>,
}

impl LabelSelection {
    /// Builds a selection from raw indices, truncating to the limit and
    /// deriving label text and series data for each index.
    #[must_use]
    pub fn derive(
        indices: impl IntoIterator<Item = usize>,
        snapshot: &ChartSnapshot,
        policy: SelectionPolicy,
    ) -> Self {
        let mut data_index: SelectedIndices = indices.into_iter().collect();
        policy.truncate(&mut data_index);

        let label = data_index
            .iter()
            .map(|index| snapshot.labels.get(*index).cloned().unwrap_or_default())
            .collect();
        let data = data_index
            .iter()
            .map(|index| {
                snapshot
                    .series
                    .iter()
                    .filter_map(|(id, entry)| Some((id.clone(), entry.data.get(*index)?.clone())))
                    .collect()
            })
            .collect();

        Self {
            data_index,
            label,
            data,
        }
    }

    /// Returns the selection after toggling `index`; indices outside the label
    /// list are never added.
    #[must_use]
    pub fn toggled(&self, index: usize, snapshot: &ChartSnapshot, policy: SelectionPolicy) -> Self {
        let addable = index < snapshot.labels.len();
        let next = policy.toggle(&self.data_index, index, addable);
        Self::derive(next, snapshot, policy)
    }

    /// Shifts every index by `delta`; indices moved below zero are dropped.
    #[must_use]
    pub fn shifted(&self, delta: isize, snapshot: &ChartSnapshot, policy: SelectionPolicy) -> Self {
        let shifted = self
            .data_index
            .iter()
            .filter_map(|index| index.checked_add_signed(delta));
        Self::derive(shifted, snapshot, policy)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_index.is_empty()
    }
}

/// Selected series identifiers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSelection {
    pub series_id: SelectedSeriesIds,
}

impl SeriesSelection {
    /// Builds a selection from `ids`, keeping only series present in the
    /// snapshot and truncating to the policy limit.
    #[must_use]
    pub fn derive(
        ids: impl IntoIterator<Item = SeriesId>,
        snapshot: &ChartSnapshot,
        policy: SelectionPolicy,
    ) -> Self {
        let mut series_id: SelectedSeriesIds = ids
            .into_iter()
            .filter(|id| snapshot.series.contains_key(id))
            .collect();
        policy.truncate(&mut series_id);
        Self { series_id }
    }

    /// Returns the selection after toggling `id`; unknown series are never
    /// added.
    #[must_use]
    pub fn toggled(&self, id: SeriesId, snapshot: &ChartSnapshot, policy: SelectionPolicy) -> Self {
        let addable = snapshot.series.contains_key(&id);
        Self {
            series_id: policy.toggle(&self.series_id, id, addable),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series_id.is_empty()
    }
}

/// Active selection; a chart runs in exactly one of the two modes.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectInfo {
    Label(LabelSelection),
    Series(SeriesSelection),
}

impl SelectInfo {
    #[must_use]
    pub fn labels(&self) -> Option<&LabelSelection> {
        match self {
            Self::Label(selection) => Some(selection),
            Self::Series(_) => None,
        }
    }

    #[must_use]
    pub fn series(&self) -> Option<&SeriesSelection> {
        match self {
            Self::Series(selection) => Some(selection),
            Self::Label(_) => None,
        }
    }
}

/// Currently selected data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSelection {
    pub series_id: SeriesId,
    /// `None` for pie charts, where a series is a single item.
    pub data_index: Option<usize>,
}

/// Programmatic item selection request; `data_index` is unchecked input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTarget {
    pub series_id: SeriesId,
    #[serde(default)]
    pub data_index: Option<f64>,
}

impl ItemTarget {
    #[must_use]
    pub fn new(series_id: impl Into<SeriesId>, data_index: Option<f64>) -> Self {
        Self {
            series_id: series_id.into(),
            data_index,
        }
    }

    /// Validates the request against the chart.
    pub fn resolve(&self, snapshot: &ChartSnapshot, chart_type: ChartType) -> ChartResult<ItemSelection> {
        let Some(entry) = snapshot.series.get(&self.series_id) else {
            return Err(ChartError::InvalidSelection(format!(
                "unknown series `{}`",
                self.series_id
            )));
        };

        if chart_type == ChartType::Pie {
            return Ok(ItemSelection {
                series_id: self.series_id.clone(),
                data_index: None,
            });
        }

        let index = match self.data_index {
            Some(value) if value.is_finite() && value >= 0.0 && value.fract() == 0.0 => {
                value as usize
            }
            other => {
                return Err(ChartError::InvalidSelection(format!(
                    "data index must be a non-negative integer, got {other:?}"
                )));
            }
        };
        if index >= entry.data.len() {
            return Err(ChartError::InvalidSelection(format!(
                "data index {index} out of bounds for series `{}`",
                self.series_id
            )));
        }

        Ok(ItemSelection {
            series_id: self.series_id.clone(),
            data_index: Some(index),
        })
    }
}
