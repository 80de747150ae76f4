//! Engine-agnostic description of one chart.
//!
//! Nothing in here knows about the charting engine's option format; the
//! infrastructure adapter translates a [`ChartConfiguration`] into whatever
//! the widget consumes.

use super::entities::RegionSample;
use super::value_objects::{Color, Fill};
use serde::Serialize;

/// Which derivation produced a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigurationVariant {
    Trend,
    Comparison,
    Distribution,
    Regional,
    /// Regional view requested before the boundary dataset is registered
    Loading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfiguration {
    pub variant: ConfigurationVariant,
    pub title: Option<Title>,
    pub tooltip: Option<Tooltip>,
    pub legend: Option<Legend>,
    pub axes: Option<CartesianAxes>,
    pub visual_map: Option<VisualMap>,
    pub series: Vec<Series>,
}

impl ChartConfiguration {
    pub fn empty(variant: ConfigurationVariant) -> Self {
        Self {
            variant,
            title: None,
            tooltip: None,
            legend: None,
            axes: None,
            visual_map: None,
            series: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.variant == ConfigurationVariant::Loading
    }
}

/// Centered text drawn instead of (or above) the plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TooltipTrigger {
    /// One tooltip per category across all series
    Axis,
    /// One tooltip per hovered data item
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TooltipFormatter {
    /// Region name, score and monitor count
    RegionSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub trigger: TooltipTrigger,
    pub formatter: Option<TooltipFormatter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Legend {
    /// Row above the plot listing the given series names
    Top(Vec<String>),
    /// Column at the right edge listing every data item
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianAxes {
    pub categories: Vec<String>,
    /// Leave half a band of padding at both ends of the category axis
    pub boundary_gap: bool,
}

/// Continuous color scale mapping values onto colors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualMap {
    pub min: f64,
    pub max: f64,
    pub colors: Vec<Color>,
    pub high_label: String,
    pub low_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub data: SeriesData,
    pub style: SeriesStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SeriesKind {
    Line { smooth: bool },
    Bar,
    /// Doughnut when `inner_radius_pct > 0`
    Pie { inner_radius_pct: f64, outer_radius_pct: f64, center_pct: (f64, f64) },
    Map { map: String, zoom: f64, center: (f64, f64), roam: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SeriesData {
    Values(Vec<f64>),
    Slices(Vec<Slice>),
    Regions(Vec<RegionSample>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Values(values) => values.len(),
            SeriesData::Slices(slices) => slices.len(),
            SeriesData::Regions(regions) => regions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SeriesStyle {
    pub line: Option<LineStyle>,
    pub fill: Option<Fill>,
    /// Top-left, top-right, bottom-right, bottom-left
    pub corner_radius: Option<[u8; 4]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
}
