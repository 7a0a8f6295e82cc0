use cep_weather::adapters::{ViaCepClient, WeatherApiClient};
use cep_weather::http::temperature::{router, TemperatureState};
use cep_weather::utils::{logger, validation::Validate};
use cep_weather::{TemperatureConfig, WeatherPipeline};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TemperatureConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting cep-weather temperature service");
    if config.verbose {
        tracing::debug!("Temperature config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let pipeline = WeatherPipeline::new(
        ViaCepClient::new(config.viacep_url.clone()),
        WeatherApiClient::new(config.weather_url.clone(), config.weather_api_key.clone()),
    );
    let app = router(TemperatureState {
        pipeline: Arc::new(pipeline),
    });

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Temperature service listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
