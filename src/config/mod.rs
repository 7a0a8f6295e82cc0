use crate::utils::validation::{validate_non_empty, validate_url, Validate};
use crate::Result;
use clap::Parser;

/// Entry-tier service: accepts `POST /cep` and forwards to the temperature
/// service.
#[derive(Debug, Clone, Parser)]
#[command(name = "gateway")]
#[command(about = "CEP lookup gateway service")]
pub struct GatewayConfig {
    #[arg(long, default_value = "0.0.0.0:8081")]
    pub listen_addr: String,

    #[arg(long, default_value = "http://localhost:8082")]
    pub temperature_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("listen_addr", &self.listen_addr)?;
        validate_url("temperature_url", &self.temperature_url)?;
        Ok(())
    }
}

/// Downstream-tier service: resolves a CEP to a city and the city to a
/// current temperature.
#[derive(Debug, Clone, Parser)]
#[command(name = "temperature")]
#[command(about = "CEP to current-temperature resolution service")]
pub struct TemperatureConfig {
    #[arg(long, default_value = "0.0.0.0:8082")]
    pub listen_addr: String,

    #[arg(long, default_value = "https://viacep.com.br")]
    pub viacep_url: String,

    #[arg(long, default_value = "https://api.weatherapi.com")]
    pub weather_url: String,

    #[arg(long, default_value = "")]
    pub weather_api_key: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for TemperatureConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("listen_addr", &self.listen_addr)?;
        validate_url("viacep_url", &self.viacep_url)?;
        validate_url("weather_url", &self.weather_url)?;
        validate_non_empty("weather_api_key", &self.weather_api_key)?;
        Ok(())
    }
}
