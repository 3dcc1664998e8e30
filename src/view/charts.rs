use std::f64::consts::PI;

use crate::models::{CategoryPie, DailyTrend, Period};
use crate::view::format::compact;

/// Pie colors, reused in order when there are more categories
pub const PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

const PAD_LEFT: f64 = 44.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Consumption line with a constant target reference line
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    pub labels: Vec<String>,
    pub actual: Series,
    pub target: Series,
}

/// SVG coordinates for a trend chart
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPlot {
    pub width: f64,
    pub height: f64,
    pub actual_points: String,
    pub target_points: String,
    pub baseline_y: f64,
    pub x_labels: Vec<(f64, String)>,
    pub y_max: f64,
}

impl TrendChart {
    pub fn build(period: Period, trend: &DailyTrend) -> Self {
        let label = period.series_label().to_string();
        Self {
            title: label.clone(),
            labels: trend.labels.clone(),
            actual: Series {
                label,
                values: trend.data.clone(),
            },
            target: Series {
                label: format!("Target ({} L)", compact(trend.target)),
                values: vec![trend.target; trend.labels.len()],
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Upper bound of the y axis
    pub fn y_max(&self) -> f64 {
        self.actual
            .values
            .iter()
            .chain(self.target.values.iter())
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max)
            .max(1.0)
            * 1.1
    }

    pub fn plot(&self, width: f64, height: f64) -> TrendPlot {
        let y_max = self.y_max();
        let plot_w = width - PAD_LEFT - PAD_RIGHT;
        let plot_h = height - PAD_TOP - PAD_BOTTOM;
        let count = self.labels.len();

        let x = |i: usize| {
            if count <= 1 {
                PAD_LEFT + plot_w / 2.0
            } else {
                PAD_LEFT + plot_w * i as f64 / (count - 1) as f64
            }
        };
        let y = |v: f64| {
            let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
            PAD_TOP + plot_h * (1.0 - v / y_max)
        };
        let points = |values: &[f64]| {
            values
                .iter()
                .take(count)
                .enumerate()
                .map(|(i, v)| format!("{:.1},{:.1}", x(i), y(*v)))
                .collect::<Vec<_>>()
                .join(" ")
        };

        TrendPlot {
            width,
            height,
            actual_points: points(&self.actual.values),
            target_points: points(&self.target.values),
            baseline_y: PAD_TOP + plot_h,
            x_labels: self
                .labels
                .iter()
                .enumerate()
                .map(|(i, l)| (x(i), l.clone()))
                .collect(),
            y_max,
        }
    }
}

/// One colored sector
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Start and end as fractions of the full circle
    pub start: f64,
    pub end: f64,
}

impl PieSlice {
    pub fn is_full_circle(&self) -> bool {
        self.end - self.start >= 0.9999
    }

    pub fn percent(&self) -> f64 {
        (self.end - self.start) * 100.0
    }

    /// SVG path for this sector of a circle at (cx, cy) with radius r
    pub fn path(&self, cx: f64, cy: f64, r: f64) -> String {
        let point = |fraction: f64| {
            // Start at twelve o'clock, clockwise
            let angle = 2.0 * PI * fraction - PI / 2.0;
            (cx + r * angle.cos(), cy + r * angle.sin())
        };
        let (x0, y0) = point(self.start);
        let (x1, y1) = point(self.end);
        let large_arc = if self.end - self.start > 0.5 { 1 } else { 0 };

        format!(
            "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
            cx, cy, x0, y0, r, r, large_arc, x1, y1
        )
    }
}

/// Category share chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn build(pie: &CategoryPie) -> Self {
        let entries: Vec<(usize, &String, f64)> = pie
            .labels
            .iter()
            .zip(pie.data.iter().copied())
            .enumerate()
            .filter(|(_, (_, v))| v.is_finite() && *v > 0.0)
            .map(|(i, (l, v))| (i, l, v))
            .collect();
        let total: f64 = entries.iter().map(|(_, _, v)| v).sum();

        let mut cursor = 0.0;
        let slices = entries
            .into_iter()
            .map(|(index, label, value)| {
                let start = cursor;
                cursor += value / total;
                PieSlice {
                    label: label.clone(),
                    value,
                    color: palette_color(index),
                    start,
                    end: cursor,
                }
            })
            .collect();

        Self {
            title: "Category breakdown".to_string(),
            slices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Chart instance with the id it was rendered under
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance<T> {
    pub id: u64,
    pub chart: T,
}

/// Holder for the chart drawn on one canvas. Installing a chart disposes
/// the previous instance first, so a canvas never carries two renders.
#[derive(Debug)]
pub struct ChartSlot<T> {
    current: Option<ChartInstance<T>>,
    last_id: u64,
    disposed: u64,
}

impl<T> Default for ChartSlot<T> {
    fn default() -> Self {
        Self {
            current: None,
            last_id: 0,
            disposed: 0,
        }
    }
}

impl<T> ChartSlot<T> {
    /// Dispose the current chart and install `chart`, returning its id
    pub fn replace(&mut self, chart: T) -> u64 {
        if let Some(old) = self.current.take() {
            log::debug!("Disposing chart instance {}", old.id);
            self.disposed += 1;
            drop(old);
        }
        self.last_id += 1;
        self.current = Some(ChartInstance {
            id: self.last_id,
            chart,
        });
        self.last_id
    }

    pub fn current(&self) -> Option<&ChartInstance<T>> {
        self.current.as_ref()
    }

    pub fn disposed_count(&self) -> u64 {
        self.disposed
    }
}
