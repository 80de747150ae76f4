use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use wasm_bindgen::JsValue;

/// Logger writing to the browser console with the matching console method.
/// Level filtering happens in the facade, see [`set_max_level`](crate::domain::logging::set_max_level).
pub struct ConsoleLogger;

impl ConsoleLogger {
    fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = BrowserTimeProvider.format_timestamp(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!("[{}] {} {} | {}", timestamp, entry.level, entry.component, entry.message),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        let formatted: JsValue = Self::format_log_entry(&entry).into();
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Wall clock backed by `Date.now()`
pub struct BrowserTimeProvider;

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}
