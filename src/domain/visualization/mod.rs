//! Visualization aggregate: modes, sample tables and chart configurations.

pub mod configuration;
pub mod entities;
pub mod services;
pub mod value_objects;
pub mod widget;

pub use configuration::*;
pub use entities::*;
pub use services::*;
pub use value_objects::*;
pub use widget::*;
