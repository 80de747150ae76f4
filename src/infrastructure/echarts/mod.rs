//! Adapter between the engine-agnostic chart configuration and ECharts.

pub mod bridge;
pub mod option;
pub mod tooltip;

pub use bridge::{EChartsEngine, EChartsWidget};
pub use option::to_echarts_option;
pub use tooltip::{TooltipParams, region_tooltip_html};
