//! `ChartConfiguration` -> ECharts option JSON.
//!
//! Decorative constants of the section (dark glass tooltips, translucent
//! axis lines) live here; everything data-related comes from the
//! configuration. Tooltip formatter callbacks cannot be expressed in JSON and
//! are attached by the bridge after conversion.

use crate::domain::visualization::{
    CartesianAxes, ChartConfiguration, Color, Fill, Legend, Series, SeriesData, SeriesKind, Title,
    Tooltip, TooltipTrigger, VisualMap,
};
use serde_json::{Map, Value, json};

const TEXT: &str = "#fff";
const TOOLTIP_BACKGROUND: &str = "rgba(10, 22, 40, 0.9)";
const TOOLTIP_BORDER: &str = "rgba(0, 204, 255, 0.3)";
const AXIS_LINE: &str = "rgba(255,255,255,0.3)";
const AXIS_LABEL: &str = "rgba(255,255,255,0.7)";
const SPLIT_LINE: &str = "rgba(255,255,255,0.1)";
const SLICE_BORDER: &str = "rgba(10, 22, 40, 0.8)";
const MAP_SHADOW: &str = "rgba(0, 204, 255, 0.5)";

pub fn to_echarts_option(config: &ChartConfiguration) -> Value {
    let mut option = Map::new();
    option.insert("backgroundColor".into(), json!("transparent"));

    if let Some(title) = &config.title {
        option.insert("title".into(), title_option(title));
    }
    if let Some(tooltip) = &config.tooltip {
        option.insert("tooltip".into(), tooltip_option(tooltip));
    }
    if let Some(legend) = &config.legend {
        option.insert("legend".into(), legend_option(legend));
    }
    if let Some(axes) = &config.axes {
        option.insert(
            "grid".into(),
            json!({"left": "3%", "right": "4%", "bottom": "3%", "containLabel": true}),
        );
        let (x_axis, y_axis) = axes_option(axes);
        option.insert("xAxis".into(), x_axis);
        option.insert("yAxis".into(), y_axis);
    }
    if let Some(visual_map) = &config.visual_map {
        option.insert("visualMap".into(), visual_map_option(visual_map));
    }
    if !config.series.is_empty() {
        option.insert("series".into(), config.series.iter().map(series_option).collect());
    }

    Value::Object(option)
}

pub fn fill_value(fill: &Fill) -> Value {
    match fill {
        Fill::Solid(color) => json!(color.to_css()),
        Fill::VerticalGradient(stops) => json!({
            "type": "linear",
            "x": 0,
            "y": 0,
            "x2": 0,
            "y2": 1,
            "colorStops": stops
                .iter()
                .map(|stop| json!({"offset": stop.offset, "color": stop.color.to_css()}))
                .collect::<Vec<_>>(),
        }),
    }
}

fn title_option(title: &Title) -> Value {
    json!({
        "text": title.text,
        "left": "center",
        "top": "center",
        "textStyle": {"color": TEXT, "fontSize": title.font_size},
    })
}

fn tooltip_option(tooltip: &Tooltip) -> Value {
    let trigger = match tooltip.trigger {
        TooltipTrigger::Axis => "axis",
        TooltipTrigger::Item => "item",
    };
    json!({
        "trigger": trigger,
        "backgroundColor": TOOLTIP_BACKGROUND,
        "borderColor": TOOLTIP_BORDER,
        "textStyle": {"color": TEXT},
    })
}

fn legend_option(legend: &Legend) -> Value {
    match legend {
        Legend::Top(entries) => json!({
            "data": entries,
            "textStyle": {"color": TEXT},
            "top": 10,
        }),
        Legend::Right => json!({
            "orient": "vertical",
            "right": "5%",
            "top": "center",
            "textStyle": {"color": TEXT},
        }),
    }
}

fn axes_option(axes: &CartesianAxes) -> (Value, Value) {
    let x_axis = json!({
        "type": "category",
        "boundaryGap": axes.boundary_gap,
        "data": axes.categories,
        "axisLine": {"lineStyle": {"color": AXIS_LINE}},
        "axisLabel": {"color": AXIS_LABEL},
    });
    let y_axis = json!({
        "type": "value",
        "axisLine": {"lineStyle": {"color": AXIS_LINE}},
        "axisLabel": {"color": AXIS_LABEL},
        "splitLine": {"lineStyle": {"color": SPLIT_LINE}},
    });
    (x_axis, y_axis)
}

fn visual_map_option(visual_map: &VisualMap) -> Value {
    json!({
        "min": visual_map.min,
        "max": visual_map.max,
        "left": "20",
        "bottom": "20",
        "text": [visual_map.high_label, visual_map.low_label],
        "textStyle": {"color": TEXT},
        "calculable": true,
        "inRange": {"color": visual_map.colors.iter().map(Color::to_css).collect::<Vec<_>>()},
    })
}

fn series_data(data: &SeriesData) -> Value {
    match data {
        SeriesData::Values(values) => json!(values),
        SeriesData::Slices(slices) => slices
            .iter()
            .map(|slice| {
                json!({
                    "name": slice.name,
                    "value": slice.value,
                    "itemStyle": {"color": slice.color.to_css()},
                })
            })
            .collect(),
        SeriesData::Regions(regions) => regions
            .iter()
            .map(|region| {
                json!({
                    "name": region.name,
                    "value": region.value,
                    "monitors": region.monitor_count,
                })
            })
            .collect(),
    }
}

fn series_option(series: &Series) -> Value {
    let mut out = Map::new();
    out.insert("name".into(), json!(series.name));
    out.insert("data".into(), series_data(&series.data));

    match &series.kind {
        SeriesKind::Line { smooth } => {
            out.insert("type".into(), json!("line"));
            out.insert("smooth".into(), json!(smooth));
            if let Some(line) = &series.style.line {
                out.insert("lineStyle".into(), json!({"color": line.color.to_css(), "width": line.width}));
            }
            if let Some(fill) = &series.style.fill {
                out.insert("areaStyle".into(), json!({"color": fill_value(fill)}));
            }
        }
        SeriesKind::Bar => {
            out.insert("type".into(), json!("bar"));
            let mut item_style = Map::new();
            if let Some(fill) = &series.style.fill {
                item_style.insert("color".into(), fill_value(fill));
            }
            if let Some(radius) = series.style.corner_radius {
                item_style.insert("borderRadius".into(), json!(radius));
            }
            out.insert("itemStyle".into(), Value::Object(item_style));
        }
        SeriesKind::Pie { inner_radius_pct, outer_radius_pct, center_pct } => {
            out.insert("type".into(), json!("pie"));
            out.insert("radius".into(), json!([percent(*inner_radius_pct), percent(*outer_radius_pct)]));
            out.insert("center".into(), json!([percent(center_pct.0), percent(center_pct.1)]));
            out.insert("avoidLabelOverlap".into(), json!(false));
            out.insert(
                "itemStyle".into(),
                json!({"borderRadius": 10, "borderColor": SLICE_BORDER, "borderWidth": 2}),
            );
            out.insert("label".into(), json!({"show": false, "position": "center"}));
            out.insert(
                "emphasis".into(),
                json!({"label": {"show": true, "fontSize": 20, "fontWeight": "bold", "color": TEXT}}),
            );
            out.insert("labelLine".into(), json!({"show": false}));
        }
        SeriesKind::Map { map, zoom, center, roam } => {
            out.insert("type".into(), json!("map"));
            out.insert("map".into(), json!(map));
            out.insert("roam".into(), json!(roam));
            out.insert("zoom".into(), json!(zoom));
            out.insert("center".into(), json!([center.0, center.1]));
            out.insert("label".into(), json!({"show": true, "color": TEXT, "fontSize": 10}));

            let border = series.style.line.map(|line| line.color).unwrap_or(Color::CYAN);
            out.insert(
                "emphasis".into(),
                json!({
                    "label": {"show": true, "color": TEXT, "fontSize": 12, "fontWeight": "bold"},
                    "itemStyle": {
                        "areaColor": border.to_css(),
                        "shadowBlur": 20,
                        "shadowColor": MAP_SHADOW,
                    },
                }),
            );

            let mut item_style = Map::new();
            if let Some(fill) = &series.style.fill {
                item_style.insert("areaColor".into(), fill_value(fill));
            }
            if let Some(line) = &series.style.line {
                item_style.insert("borderColor".into(), json!(line.color.to_css()));
                item_style.insert("borderWidth".into(), json!(line.width));
            }
            out.insert("itemStyle".into(), Value::Object(item_style));
        }
    }

    Value::Object(out)
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::visualization::{DatasetLoadState, VisualizationMode, derive_configuration};

    #[test]
    fn gradient_is_vertical_linear() {
        let value = fill_value(&Fill::vertical(Color::CYAN, Color::OCEAN));
        assert_eq!(value["type"], "linear");
        assert_eq!(value["y2"], 1);
        assert_eq!(value["colorStops"][0]["color"], "#00CCFF");
        assert_eq!(value["colorStops"][1]["offset"], 1.0);
    }

    #[test]
    fn pie_percentages_render_as_strings() {
        let config = derive_configuration(VisualizationMode::Distribution, DatasetLoadState::NotLoaded);
        let option = to_echarts_option(config);
        assert_eq!(option["series"][0]["radius"], json!(["40%", "70%"]));
        assert_eq!(option["series"][0]["center"], json!(["40%", "50%"]));
    }
}
