// Adapters: reqwest clients implementing the domain ports against the
// concrete providers, plus the gateway's client for the temperature service.

pub mod downstream;
pub mod viacep;
pub mod weather;

pub use downstream::TemperatureServiceClient;
pub use viacep::ViaCepClient;
pub use weather::WeatherApiClient;
