use leptos::*;
use wasm_bindgen::prelude::*;

use crate::app::VisualizationSection;
use crate::config::VisualizationConfig;
use crate::domain::logging::{LogComponent, get_logger};

/// Mount the visualization section into `<body>` with default settings
#[wasm_bindgen(js_name = mountVisualization)]
pub fn mount_visualization() {
    mount_with(VisualizationConfig::default());
}

/// Mount with JSON overrides; malformed input falls back to the defaults
#[wasm_bindgen(js_name = mountVisualizationWithConfig)]
pub fn mount_visualization_with_config(config_json: &str) {
    mount_with(VisualizationConfig::from_json_or_default(config_json));
}

fn mount_with(config: VisualizationConfig) {
    get_logger().info(
        LogComponent::Presentation("WasmApi"),
        &format!("📊 Mounting visualization (dataset: {})", config.dataset_url),
    );
    mount_to_body(move || view! { <VisualizationSection config=config.clone() /> });
}
