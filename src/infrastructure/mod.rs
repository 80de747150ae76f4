pub mod animation;
pub mod echarts;
pub mod http;
pub mod services;
