use cep_weather::adapters::TemperatureServiceClient;
use cep_weather::http::gateway::{router, GatewayState};
use cep_weather::utils::{logger, validation::Validate};
use cep_weather::GatewayConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting cep-weather gateway");
    if config.verbose {
        tracing::debug!("Gateway config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let state = GatewayState {
        downstream: TemperatureServiceClient::new(config.temperature_url.clone()),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Gateway listening on {}", config.listen_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
