//! Contract of the external rendering widget.
//!
//! The charting engine is a black box; the application layer only talks to
//! it through these traits so the lifecycle logic can run without a browser.

use super::configuration::ChartConfiguration;
use crate::domain::errors::WidgetResult;
use serde_json::Value;

/// One live widget instance bound to a display surface
pub trait RenderingWidget {
    /// Replace the whole visual state. Prior series, axes and tooltips are
    /// discarded, never merged.
    fn set_option(&self, config: &ChartConfiguration) -> WidgetResult<()>;

    fn resize(&self);

    /// Release the rendering context. Not called twice by the host.
    fn dispose(&self);
}

/// Registration returned by [`WidgetEngine::observe_resize`]
pub trait ResizeSubscription {
    fn remove(self);
}

/// Engine-wide entry points of the charting library
pub trait WidgetEngine {
    type Surface;
    type Widget: RenderingWidget + 'static;
    type Resize: ResizeSubscription;

    fn init(&self, surface: &Self::Surface) -> WidgetResult<Self::Widget>;

    /// Call `on_resize` whenever the surface may have changed size
    fn observe_resize(&self, on_resize: Box<dyn FnMut()>) -> Self::Resize;

    /// Make a boundary dataset available to map series under `name`
    fn register_map(&self, name: &str, geo_json: &Value) -> WidgetResult<()>;
}
