use derive_more::Display;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

/// Log levels with automatic Display implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

impl LogLevel {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Architectural layer a log line originates from
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// Structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: &str) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }
}

/// Clock used to stamp log entries
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for structured log entries
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn trace(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Trace, component, message);
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Debug, component, message);
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Info, component, message);
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Warn, component, message);
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Error, component, message);
    }

    /// Log with structured metadata (serialized JSON, key=value pairs, ...)
    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        if level >= max_level() {
            self.log(LogEntry::new(level, component, message).with_metadata(metadata));
        }
    }

    #[doc(hidden)]
    fn emit(&self, level: LogLevel, component: LogComponent, message: &str) {
        if level >= max_level() {
            self.log(LogEntry::new(level, component, message));
        }
    }
}

static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();
static MAX_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Trace as u8);

/// Install the process-wide logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    GLOBAL_LOGGER.set(logger).is_ok()
}

/// Install the process-wide time provider. Later calls are ignored.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) -> bool {
    GLOBAL_TIME_PROVIDER.set(time_provider).is_ok()
}

/// Entries below this level are dropped before reaching the logger
pub fn set_max_level(level: LogLevel) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn max_level() -> LogLevel {
    LogLevel::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER
        .get()
        .map(|logger| logger.as_ref())
        .unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER
        .get()
        .map(|provider| provider.as_ref())
        .unwrap_or(&CounterTimeProvider)
}

/// Used until a logger is installed (native tests never install one)
struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter standing in for a clock outside the browser
struct CounterTimeProvider;

impl TimeProvider for CounterTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::AtomicU64;
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp)
    }
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}
