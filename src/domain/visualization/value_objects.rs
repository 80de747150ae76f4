use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Value Object - the chart category shown in the section
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum VisualizationMode {
    #[default]
    #[display(fmt = "趋势分析")]
    #[strum(serialize = "line")]
    #[serde(rename = "line")]
    Trend,
    #[display(fmt = "对比统计")]
    #[strum(serialize = "bar")]
    #[serde(rename = "bar")]
    Comparison,
    #[display(fmt = "分布占比")]
    #[strum(serialize = "pie")]
    #[serde(rename = "pie")]
    Distribution,
    #[display(fmt = "区域分布")]
    #[strum(serialize = "map")]
    #[serde(rename = "map")]
    Regional,
}

impl VisualizationMode {
    /// Stable identifier used for the tab DOM ids
    pub fn tab_id(&self) -> &'static str {
        self.into()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VisualizationMode::Trend => "📈",
            VisualizationMode::Comparison => "📊",
            VisualizationMode::Distribution => "🥧",
            VisualizationMode::Regional => "🗺",
        }
    }

    /// Only the map view depends on the boundary dataset
    pub fn needs_dataset(&self) -> bool {
        matches!(self, VisualizationMode::Regional)
    }
}

/// Value Object - whether the geographic boundary dataset is registered.
///
/// The only transition is `NotLoaded -> Loaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatasetLoadState {
    #[default]
    NotLoaded,
    Loaded,
}

impl DatasetLoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DatasetLoadState::Loaded)
    }
}

impl From<bool> for DatasetLoadState {
    fn from(loaded: bool) -> Self {
        if loaded { DatasetLoadState::Loaded } else { DatasetLoadState::NotLoaded }
    }
}

/// Value Object - sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(((hex >> 16) & 0xFF) as u8, ((hex >> 8) & 0xFF) as u8, (hex & 0xFF) as u8)
    }

    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// `#RRGGBB` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const CYAN: Color = Color::from_hex(0x00CCFF);
    pub const OCEAN: Color = Color::from_hex(0x0066CC);
    pub const GREEN: Color = Color::from_hex(0x00CC66);
    pub const DEEP_GREEN: Color = Color::from_hex(0x00994D);
    pub const YELLOW: Color = Color::from_hex(0xFFCC00);
    pub const ORANGE: Color = Color::from_hex(0xFF9900);
    pub const RED: Color = Color::from_hex(0xFF4444);
}

/// One stop of a gradient, `offset` in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Paint for areas, bars and slices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Fill {
    Solid(Color),
    /// Top-to-bottom linear gradient
    VerticalGradient(Vec<ColorStop>),
}

impl Fill {
    pub fn vertical(from: Color, to: Color) -> Self {
        Fill::VerticalGradient(vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)])
    }

    /// The series color fading out towards the axis
    pub fn fade_out(color: Color, alpha: f32) -> Self {
        Self::vertical(color.with_alpha(alpha), color.with_alpha(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn modes_round_trip_through_tab_ids() {
        for mode in VisualizationMode::iter() {
            assert_eq!(VisualizationMode::from_str(mode.tab_id()).unwrap(), mode);
        }
        assert_eq!(VisualizationMode::iter().count(), 4);
    }

    #[test]
    fn only_regional_needs_dataset() {
        let needing: Vec<_> = VisualizationMode::iter().filter(|m| m.needs_dataset()).collect();
        assert_eq!(needing, vec![VisualizationMode::Regional]);
    }

    #[test]
    fn css_colors() {
        assert_eq!(Color::CYAN.to_css(), "#00CCFF");
        assert_eq!(Color::CYAN.with_alpha(0.3).to_css(), "rgba(0, 204, 255, 0.3)");
        assert_eq!(Color::OCEAN.with_alpha(0.0).to_css(), "rgba(0, 102, 204, 0)");
    }
}
