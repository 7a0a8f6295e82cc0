pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use crate::config::{GatewayConfig, TemperatureConfig};
pub use crate::core::pipeline::WeatherPipeline;
pub use crate::domain::model::TemperatureResponse;
pub use crate::utils::error::{Result, WeatherError};
