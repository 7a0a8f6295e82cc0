pub mod pipeline;

pub use pipeline::{LookupFailure, WeatherPipeline};
