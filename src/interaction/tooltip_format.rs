use std::fmt;
use std::sync::Arc;

use crate::core::{ChartType, DataPoint, format_with_thousands};

/// Text shown for heat-map cells holding an error (negative) value.
pub const HEAT_MAP_ERROR_TEXT: &str = "error";

/// Heat-map cell value as seen by a user formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatMapCellValue {
    Value(f64),
    Error,
}

/// Chart-type specific input handed to a user tooltip formatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipFormatArgs<'a> {
    Pie {
        value: f64,
        name: &'a str,
        percentage: Option<f64>,
    },
    HeatMap {
        x: Option<f64>,
        y: Option<f64>,
        value: HeatMapCellValue,
    },
    Cartesian {
        x: Option<f64>,
        y: Option<f64>,
        name: &'a str,
    },
}

/// User tooltip formatter; `None` falls back to default numeric formatting.
pub type TooltipValueFormatter =
    Arc<dyn Fn(&TooltipFormatArgs<'_>) -> Option<String> + Send + Sync + 'static>;

/// Converts raw hit values into tooltip text.
#[derive(Clone, Default)]
pub struct TooltipFormatter {
    chart_type: ChartType,
    horizontal: bool,
    formatter: Option<TooltipValueFormatter>,
}

impl fmt::Debug for TooltipFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipFormatter")
            .field("chart_type", &self.chart_type)
            .field("horizontal", &self.horizontal)
            .field("has_formatter", &self.formatter.is_some())
            .finish()
    }
}

impl TooltipFormatter {
    #[must_use]
    pub fn new(chart_type: ChartType, horizontal: bool) -> Self {
        Self {
            chart_type,
            horizontal,
            formatter: None,
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Option<TooltipValueFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Formats one hit value.
    ///
    /// Heat-map negative values always render as [`HEAT_MAP_ERROR_TEXT`]; the
    /// user formatter still observes them as [`HeatMapCellValue::Error`].
    #[must_use]
    pub fn format(&self, series_name: &str, value: f64, item: &DataPoint) -> String {
        let custom = self
            .formatter
            .as_ref()
            .and_then(|formatter| formatter(&self.format_args(series_name, value, item)));

        if self.chart_type == ChartType::HeatMap && value < 0.0 {
            return HEAT_MAP_ERROR_TEXT.to_owned();
        }

        custom.unwrap_or_else(|| format_with_thousands(value))
    }

    fn format_args<'a>(
        &self,
        series_name: &'a str,
        value: f64,
        item: &DataPoint,
    ) -> TooltipFormatArgs<'a> {
        match self.chart_type {
            ChartType::Pie => TooltipFormatArgs::Pie {
                value,
                name: series_name,
                percentage: item.percentage,
            },
            ChartType::HeatMap => TooltipFormatArgs::HeatMap {
                x: item.x,
                y: item.y,
                value: if value < 0.0 {
                    HeatMapCellValue::Error
                } else {
                    HeatMapCellValue::Value(value)
                },
            },
            ChartType::Line | ChartType::Bar | ChartType::Scatter => {
                let (x, y) = if self.horizontal {
                    (Some(value), item.y)
                } else {
                    (item.x, Some(value))
                };
                TooltipFormatArgs::Cartesian {
                    x,
                    y,
                    name: series_name,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{HEAT_MAP_ERROR_TEXT, TooltipFormatArgs, TooltipFormatter, TooltipValueFormatter};
    use crate::core::{ChartType, DataPoint};

    #[test]
    fn default_formatting_groups_thousands() {
        let formatter = TooltipFormatter::new(ChartType::Bar, false);
        assert_eq!(
            formatter.format("s", 12_345.5, &DataPoint::xy(1.0, 12_345.5)),
            "12,345.5"
        );
    }

    #[test]
    fn cartesian_args_swap_measured_axis_when_horizontal() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let user: TooltipValueFormatter =
            Arc::new(move |args: &TooltipFormatArgs<'_>| -> Option<String> {
                if let TooltipFormatArgs::Cartesian { x, y, .. } = *args {
                    sink.lock().expect("sink").push((x, y));
                }
                None
            });

        let item = DataPoint::xy(3.0, 7.0);
        let _ = TooltipFormatter::new(ChartType::Line, false)
            .with_formatter(Some(user.clone()))
            .format("s", 42.0, &item);
        let _ = TooltipFormatter::new(ChartType::Line, true)
            .with_formatter(Some(user))
            .format("s", 42.0, &item);

        let seen = seen.lock().expect("seen");
        assert_eq!(seen[0], (Some(3.0), Some(42.0)));
        assert_eq!(seen[1], (Some(42.0), Some(7.0)));
    }

    #[test]
    fn non_string_formatter_result_falls_back() {
        let user: TooltipValueFormatter =
            Arc::new(|_args: &TooltipFormatArgs<'_>| -> Option<String> { None });
        let formatter = TooltipFormatter::new(ChartType::Pie, false).with_formatter(Some(user));
        assert_eq!(formatter.format("p", 1_000.0, &DataPoint::default()), "1,000");
    }

    #[test]
    fn heat_map_negative_is_error_even_with_formatter() {
        let user: TooltipValueFormatter =
            Arc::new(|_args: &TooltipFormatArgs<'_>| -> Option<String> {
                Some("custom".to_owned())
            });
        let formatter =
            TooltipFormatter::new(ChartType::HeatMap, false).with_formatter(Some(user));
        assert_eq!(
            formatter.format("h", -1.0, &DataPoint::xy(0.0, 0.0)),
            HEAT_MAP_ERROR_TEXT
        );
        assert_eq!(formatter.format("h", 3.0, &DataPoint::xy(0.0, 0.0)), "custom");
    }
}
