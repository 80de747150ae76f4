#![cfg(feature = "logic-only")]

use water_quality_viz::config::VisualizationConfig;
use water_quality_viz::domain::visualization::{
    Color, DatasetLoadState, VisualizationMode, derive_configuration,
};
use water_quality_viz::infrastructure::echarts::to_echarts_option;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn config_overrides_reach_initial_mode() {
    let config = VisualizationConfig::from_json(r#"{"initial_mode":"pie","dataset_url":"/geo/cn.json"}"#)
        .unwrap();
    assert_eq!(config.initial_mode, VisualizationMode::Distribution);
    assert_eq!(config.dataset_url, "/geo/cn.json");
    assert_eq!(config.surface_id, "visualization-chart");
}

#[wasm_bindgen_test]
fn css_color_formatting() {
    assert_eq!(Color::RED.to_css(), "#FF4444");
    assert_eq!(Color::WHITE.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
}

#[wasm_bindgen_test]
fn comparison_bars_round_top_corners() {
    let config = derive_configuration(VisualizationMode::Comparison, DatasetLoadState::NotLoaded);
    let option = to_echarts_option(config);
    assert_eq!(option["series"][0]["itemStyle"]["borderRadius"], serde_json::json!([4, 4, 0, 0]));
    assert_eq!(option["series"][1]["itemStyle"]["color"]["colorStops"][1]["color"], "#00994D");
}
