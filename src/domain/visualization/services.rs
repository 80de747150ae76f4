use super::configuration::{
    CartesianAxes, ChartConfiguration, ConfigurationVariant, Legend, LineStyle, Series, SeriesData,
    SeriesKind, SeriesStyle, Slice, Title, Tooltip, TooltipFormatter, TooltipTrigger, VisualMap,
};
use super::entities::REGION_SAMPLES;
use super::value_objects::{Color, DatasetLoadState, Fill, VisualizationMode};
use once_cell::sync::Lazy;

/// Name under which the boundary dataset is registered with the engine
pub const CHINA_MAP: &str = "china";

pub const REGION_SCORE_MIN: f64 = 70.0;
pub const REGION_SCORE_MAX: f64 = 100.0;

pub const LOADING_TITLE: &str = "地图加载中...";

static TREND: Lazy<ChartConfiguration> = Lazy::new(trend_configuration);
static COMPARISON: Lazy<ChartConfiguration> = Lazy::new(comparison_configuration);
static DISTRIBUTION: Lazy<ChartConfiguration> = Lazy::new(distribution_configuration);
static REGIONAL: Lazy<ChartConfiguration> = Lazy::new(regional_configuration);
static LOADING: Lazy<ChartConfiguration> = Lazy::new(loading_configuration);

/// Derive the configuration for a mode and dataset state.
///
/// Total over every combination and free of side effects. Each combination
/// maps to one shared instance, so equal inputs return the same reference.
/// Only [`VisualizationMode::Regional`] looks at `load_state`.
pub fn derive_configuration(
    mode: VisualizationMode,
    load_state: DatasetLoadState,
) -> &'static ChartConfiguration {
    match (mode, load_state) {
        (VisualizationMode::Trend, _) => &*TREND,
        (VisualizationMode::Comparison, _) => &*COMPARISON,
        (VisualizationMode::Distribution, _) => &*DISTRIBUTION,
        (VisualizationMode::Regional, DatasetLoadState::Loaded) => &*REGIONAL,
        (VisualizationMode::Regional, DatasetLoadState::NotLoaded) => &*LOADING,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn trend_line(name: &str, data: &[f64], color: Color) -> Series {
    Series {
        name: name.to_string(),
        kind: SeriesKind::Line { smooth: true },
        data: SeriesData::Values(data.to_vec()),
        style: SeriesStyle {
            line: Some(LineStyle { color, width: 3.0 }),
            fill: Some(Fill::fade_out(color, 0.3)),
            corner_radius: None,
        },
    }
}

fn trend_configuration() -> ChartConfiguration {
    ChartConfiguration {
        tooltip: Some(Tooltip { trigger: TooltipTrigger::Axis, formatter: None }),
        legend: Some(Legend::Top(strings(&["pH值", "浊度", "余氯"]))),
        axes: Some(CartesianAxes {
            categories: strings(&["00:00", "04:00", "08:00", "12:00", "16:00", "20:00", "24:00"]),
            boundary_gap: false,
        }),
        series: vec![
            trend_line("pH值", &[7.2, 7.1, 7.3, 7.4, 7.2, 7.1, 7.2], Color::CYAN),
            trend_line("浊度", &[0.5, 0.6, 0.4, 0.3, 0.5, 0.7, 0.5], Color::OCEAN),
            trend_line("余氯", &[0.3, 0.35, 0.4, 0.45, 0.4, 0.35, 0.3], Color::GREEN),
        ],
        ..ChartConfiguration::empty(ConfigurationVariant::Trend)
    }
}

fn comparison_bar(name: &str, data: &[f64], top: Color, bottom: Color) -> Series {
    Series {
        name: name.to_string(),
        kind: SeriesKind::Bar,
        data: SeriesData::Values(data.to_vec()),
        style: SeriesStyle {
            line: None,
            fill: Some(Fill::vertical(top, bottom)),
            corner_radius: Some([4, 4, 0, 0]),
        },
    }
}

fn comparison_configuration() -> ChartConfiguration {
    ChartConfiguration {
        tooltip: Some(Tooltip { trigger: TooltipTrigger::Axis, formatter: None }),
        legend: Some(Legend::Top(strings(&["本月", "上月"]))),
        axes: Some(CartesianAxes {
            categories: strings(&["区域A", "区域B", "区域C", "区域D", "区域E"]),
            boundary_gap: true,
        }),
        series: vec![
            comparison_bar("本月", &[320.0, 302.0, 301.0, 334.0, 390.0], Color::CYAN, Color::OCEAN),
            comparison_bar("上月", &[220.0, 182.0, 191.0, 234.0, 290.0], Color::GREEN, Color::DEEP_GREEN),
        ],
        ..ChartConfiguration::empty(ConfigurationVariant::Comparison)
    }
}

fn distribution_configuration() -> ChartConfiguration {
    let slices = [
        ("优良", 1048.0, Color::GREEN),
        ("良好", 735.0, Color::CYAN),
        ("一般", 580.0, Color::YELLOW),
        ("较差", 484.0, Color::ORANGE),
        ("差", 300.0, Color::RED),
    ]
    .into_iter()
    .map(|(name, value, color)| Slice { name: name.to_string(), value, color })
    .collect();

    ChartConfiguration {
        tooltip: Some(Tooltip { trigger: TooltipTrigger::Item, formatter: None }),
        legend: Some(Legend::Right),
        series: vec![Series {
            name: "水质分布".to_string(),
            kind: SeriesKind::Pie {
                inner_radius_pct: 40.0,
                outer_radius_pct: 70.0,
                center_pct: (40.0, 50.0),
            },
            data: SeriesData::Slices(slices),
            style: SeriesStyle::default(),
        }],
        ..ChartConfiguration::empty(ConfigurationVariant::Distribution)
    }
}

fn regional_configuration() -> ChartConfiguration {
    ChartConfiguration {
        tooltip: Some(Tooltip {
            trigger: TooltipTrigger::Item,
            formatter: Some(TooltipFormatter::RegionSummary),
        }),
        visual_map: Some(VisualMap {
            min: REGION_SCORE_MIN,
            max: REGION_SCORE_MAX,
            colors: vec![Color::RED, Color::ORANGE, Color::YELLOW, Color::CYAN, Color::GREEN],
            high_label: "优秀".to_string(),
            low_label: "良好".to_string(),
        }),
        series: vec![Series {
            name: "水质监测".to_string(),
            kind: SeriesKind::Map {
                map: CHINA_MAP.to_string(),
                zoom: 1.2,
                center: (105.0, 36.0),
                roam: true,
            },
            data: SeriesData::Regions(REGION_SAMPLES.to_vec()),
            style: SeriesStyle {
                line: Some(LineStyle { color: Color::CYAN, width: 1.0 }),
                fill: Some(Fill::Solid(Color::OCEAN.with_alpha(0.3))),
                corner_radius: None,
            },
        }],
        ..ChartConfiguration::empty(ConfigurationVariant::Regional)
    }
}

fn loading_configuration() -> ChartConfiguration {
    ChartConfiguration {
        title: Some(Title { text: LOADING_TITLE.to_string(), font_size: 16 }),
        ..ChartConfiguration::empty(ConfigurationVariant::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_series_share_category_count() {
        let config = derive_configuration(VisualizationMode::Trend, DatasetLoadState::NotLoaded);
        let categories = config.axes.as_ref().unwrap().categories.len();
        assert!(config.series.iter().all(|s| s.data.len() == categories));
    }

    #[test]
    fn distribution_is_a_doughnut() {
        let config = derive_configuration(VisualizationMode::Distribution, DatasetLoadState::Loaded);
        assert!(config.axes.is_none());
        match &config.series[0].kind {
            SeriesKind::Pie { inner_radius_pct, outer_radius_pct, .. } => {
                assert!(inner_radius_pct < outer_radius_pct);
                assert!(*inner_radius_pct > 0.0);
            }
            other => panic!("unexpected series kind {other:?}"),
        }
    }

    #[test]
    fn map_series_targets_registered_map() {
        let config = derive_configuration(VisualizationMode::Regional, DatasetLoadState::Loaded);
        assert!(matches!(&config.series[0].kind, SeriesKind::Map { map, .. } if map == CHINA_MAP));
    }
}
