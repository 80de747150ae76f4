//! Centralized error handling for the visualization section.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type for the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Dataset(DatasetError),
    Widget(WidgetError),
    Configuration(String),
}

/// Failures while fetching the geographic boundary dataset
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The request never produced a response
    Network(String),
    /// A response arrived with a non-success status
    HttpStatus { status: u16, text: String },
    /// The body could not be decoded as JSON
    Malformed(String),
}

/// Failures at the rendering widget boundary
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    SurfaceUnavailable(String),
    AlreadyMounted,
    NotMounted,
    /// The charting engine threw while handling a call
    Bridge(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Dataset(e) => write!(f, "Dataset Error: {}", e),
            AppError::Widget(e) => write!(f, "Widget Error: {}", e),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DatasetError::Network(msg) => write!(f, "request failed: {}", msg),
            DatasetError::HttpStatus { status, text } => write!(f, "HTTP {} {}", status, text),
            DatasetError::Malformed(msg) => write!(f, "malformed payload: {}", msg),
        }
    }
}

impl Display for WidgetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            WidgetError::SurfaceUnavailable(msg) => write!(f, "display surface unavailable: {}", msg),
            WidgetError::AlreadyMounted => write!(f, "widget already mounted on this surface"),
            WidgetError::NotMounted => write!(f, "widget is not mounted"),
            WidgetError::Bridge(msg) => write!(f, "charting engine call failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for DatasetError {}
impl std::error::Error for WidgetError {}

impl From<DatasetError> for AppError {
    fn from(error: DatasetError) -> Self {
        AppError::Dataset(error)
    }
}

impl From<WidgetError> for AppError {
    fn from(error: WidgetError) -> Self {
        AppError::Widget(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Configuration(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type DatasetResult<T> = Result<T, DatasetError>;
pub type WidgetResult<T> = Result<T, WidgetError>;
