use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Install the panic hook, console logger and browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::set_max_level(if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info });
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Water quality visualization initialized",
    );
}
