use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::AppResult,
    logging::{LogComponent, get_logger},
    visualization::VisualizationMode,
};

/// Tunables of the visualization section.
///
/// Every field has a default, so a host page only lists what it overrides:
/// `{"dataset_url": "/static/china.json", "initial_mode": "map"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Static GeoJSON with the administrative region boundaries
    pub dataset_url: String,
    /// DOM id of the element the widget draws into
    pub surface_id: String,
    pub initial_mode: VisualizationMode,
    /// Fraction of the viewport height the section top must cross
    pub entrance_threshold: f64,
    pub entrance_offset_px: f64,
    pub entrance_duration_ms: u32,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            dataset_url: "/china.json".to_string(),
            surface_id: "visualization-chart".to_string(),
            initial_mode: VisualizationMode::Trend,
            entrance_threshold: 0.7,
            entrance_offset_px: 60.0,
            entrance_duration_ms: 800,
        }
    }
}

impl VisualizationConfig {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse overrides, falling back to defaults on malformed input
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|e| {
            get_logger().warn(
                LogComponent::Presentation("Config"),
                &format!("⚠️ Ignoring visualization config: {}", e),
            );
            Self::default()
        })
    }
}
