use crate::domain::model::TemperatureReading;
use crate::domain::ports::TemperatureResolver;
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    #[serde(default)]
    current: CurrentConditions,
}

// An absent temp_c decodes to the numeric default rather than failing.
#[derive(Debug, Deserialize, Default)]
struct CurrentConditions {
    #[serde(default)]
    temp_c: f64,
}

/// Temperature lookup against a WeatherAPI-shaped service.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TemperatureResolver for WeatherApiClient {
    #[tracing::instrument(skip(self), fields(city = %city))]
    async fn resolve_temperature(&self, city: &str) -> Result<TemperatureReading> {
        let url = format!("{}/v1/current.json", self.base_url);
        tracing::debug!("requesting current conditions: {}", url);

        // City names may contain spaces and non-ASCII; reqwest
        // percent-encodes the query pairs.
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("key", &self.api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("weather provider returned status {}", status);
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: WeatherApiResponse = response.json().await?;
        Ok(TemperatureReading {
            celsius: body.current.temp_c,
        })
    }
}
