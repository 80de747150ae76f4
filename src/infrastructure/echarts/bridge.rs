//! wasm-bindgen bindings to the `echarts` browser global.

use std::cell::RefCell;

use gloo::utils::format::JsValueSerdeExt;
use js_sys::Reflect;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::option::to_echarts_option;
use super::tooltip::{TooltipParams, region_tooltip_html};
use crate::domain::{
    errors::{WidgetError, WidgetResult},
    logging::{LogComponent, get_logger},
    visualization::{ChartConfiguration, RenderingWidget, ResizeSubscription, TooltipFormatter, WidgetEngine},
};
use crate::event_utils::{EventOptions, WindowListener, listen_window};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = init, catch)]
    fn echarts_init(surface: &web_sys::HtmlElement) -> Result<EChartsInstance, JsValue>;

    #[wasm_bindgen(js_namespace = echarts, js_name = registerMap, catch)]
    fn echarts_register_map(name: &str, geo_json: &JsValue) -> Result<(), JsValue>;

    pub type EChartsInstance;

    #[wasm_bindgen(method, js_name = setOption, catch)]
    fn set_option(this: &EChartsInstance, option: &JsValue, not_merge: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn resize(this: &EChartsInstance);

    #[wasm_bindgen(method)]
    fn dispose(this: &EChartsInstance);
}

fn bridge_error(context: &str, error: JsValue) -> WidgetError {
    WidgetError::Bridge(format!("{}: {:?}", context, error))
}

/// ECharts as the section's charting engine
#[derive(Debug, Clone, Copy, Default)]
pub struct EChartsEngine;

impl EChartsEngine {
    pub fn new() -> Self {
        Self
    }
}

impl WidgetEngine for EChartsEngine {
    type Surface = web_sys::HtmlElement;
    type Widget = EChartsWidget;
    type Resize = WindowListener;

    fn init(&self, surface: &Self::Surface) -> WidgetResult<EChartsWidget> {
        if !surface.is_connected() {
            return Err(WidgetError::SurfaceUnavailable(format!(
                "#{} is not attached to the document",
                surface.id()
            )));
        }
        let instance = echarts_init(surface).map_err(|e| bridge_error("echarts.init", e))?;
        Ok(EChartsWidget { instance, formatter: RefCell::new(None) })
    }

    fn observe_resize(&self, mut on_resize: Box<dyn FnMut()>) -> WindowListener {
        listen_window(leptos::ev::resize, &EventOptions::default(), move |_| on_resize())
    }

    fn register_map(&self, name: &str, geo_json: &Value) -> WidgetResult<()> {
        let geo = JsValue::from_serde(geo_json)
            .map_err(|e| WidgetError::Bridge(format!("GeoJSON conversion: {}", e)))?;
        echarts_register_map(name, &geo).map_err(|e| bridge_error("echarts.registerMap", e))
    }
}

impl ResizeSubscription for WindowListener {
    fn remove(self) {
        WindowListener::remove(self);
    }
}

/// Read the fields the formatter needs. The raw params object can hold
/// engine internals that do not survive `JSON.stringify`.
fn tooltip_params(raw: &JsValue) -> TooltipParams {
    let field = |key: &str| Reflect::get(raw, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED);
    TooltipParams {
        name: field("name").as_string().unwrap_or_default(),
        value: field("value").as_f64().filter(|value| !value.is_nan()),
        data: field("data").into_serde().ok().flatten(),
    }
}

type FormatterClosure = Closure<dyn Fn(JsValue) -> String>;

/// One `echarts.init` instance
pub struct EChartsWidget {
    instance: EChartsInstance,
    /// Keeps the tooltip callback alive while the applied option references it
    formatter: RefCell<Option<FormatterClosure>>,
}

impl EChartsWidget {
    fn attach_formatter(&self, option: &JsValue, kind: TooltipFormatter) -> WidgetResult<()> {
        let closure: FormatterClosure = match kind {
            TooltipFormatter::RegionSummary => Closure::wrap(Box::new(|params: JsValue| {
                region_tooltip_html(&tooltip_params(&params))
            }) as Box<dyn Fn(JsValue) -> String>),
        };

        let tooltip = Reflect::get(option, &JsValue::from_str("tooltip"))
            .map_err(|e| bridge_error("option.tooltip", e))?;
        Reflect::set(&tooltip, &JsValue::from_str("formatter"), closure.as_ref())
            .map_err(|e| bridge_error("tooltip.formatter", e))?;

        *self.formatter.borrow_mut() = Some(closure);
        Ok(())
    }
}

impl RenderingWidget for EChartsWidget {
    fn set_option(&self, config: &ChartConfiguration) -> WidgetResult<()> {
        let option = JsValue::from_serde(&to_echarts_option(config))
            .map_err(|e| WidgetError::Bridge(format!("option conversion: {}", e)))?;

        let formatter = config.tooltip.and_then(|tooltip| tooltip.formatter);
        if let Some(kind) = formatter {
            self.attach_formatter(&option, kind)?;
        }

        self.instance
            .set_option(&option, true)
            .map_err(|e| bridge_error("setOption", e))?;

        // Previous option is fully replaced, its callback is no longer referenced
        if formatter.is_none() {
            self.formatter.borrow_mut().take();
        }
        Ok(())
    }

    fn resize(&self) {
        self.instance.resize();
    }

    fn dispose(&self) {
        self.instance.dispose();
        self.formatter.borrow_mut().take();
        get_logger().debug(LogComponent::Infrastructure("EChartsWidget"), "echarts instance disposed");
    }
}
