#![cfg(feature = "render")]

use wasm_bindgen_test::*;
use wasm_bindgen::JsCast;
use water_quality_viz::config::VisualizationConfig;
use water_quality_viz::domain::errors::WidgetError;
use water_quality_viz::domain::visualization::WidgetEngine;
use water_quality_viz::infrastructure::echarts::EChartsEngine;
use water_quality_viz::infrastructure::animation::{
    ENTRANCE_CLASS, EntranceAnimation, STYLESHEET_ID, VISIBLE_CLASS, register_entrance_support,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn stylesheet_is_installed_once() {
    let config = VisualizationConfig::default();
    register_entrance_support(&config);
    register_entrance_support(&config);

    let installed = document().query_selector_all(&format!("#{}", STYLESHEET_ID)).unwrap();
    assert_eq!(installed.length(), 1);
}

#[wasm_bindgen_test]
fn visible_section_is_revealed_on_attach() {
    let document = document();
    let body = document.body().unwrap();
    let section = document.create_element("section").unwrap();
    let container = document.create_element("div").unwrap();
    section.append_child(&container).unwrap();
    body.insert_before(&section, body.first_child().as_ref()).unwrap();

    register_entrance_support(&VisualizationConfig::default());
    let animation = EntranceAnimation::attach(section.clone(), container.clone(), 0.7);

    assert!(animation.has_fired());
    let classes = container.class_list();
    assert!(classes.contains(ENTRANCE_CLASS));
    assert!(classes.contains(VISIBLE_CLASS));
    assert!(!animation.is_listening());

    animation.detach();
    section.remove();
}

#[wasm_bindgen_test]
fn offscreen_section_keeps_listening() {
    let document = document();
    let section = document.create_element("section").unwrap();
    section.set_attribute("style", "display: block; margin-top: 100000px;").unwrap();
    let container = document.create_element("div").unwrap();
    section.append_child(&container).unwrap();
    document.body().unwrap().append_child(&section).unwrap();

    let animation = EntranceAnimation::attach(section.clone(), container.clone(), 0.7);

    assert!(!animation.has_fired());
    assert!(animation.is_listening());
    assert!(!container.class_list().contains(VISIBLE_CLASS));

    animation.detach();
    section.remove();
}

#[wasm_bindgen_test]
fn detached_surface_is_rejected() {
    let surface: web_sys::HtmlElement = document().create_element("div").unwrap().unchecked_into();
    let result = EChartsEngine::new().init(&surface);
    assert!(matches!(result, Err(WidgetError::SurfaceUnavailable(_))));
}
