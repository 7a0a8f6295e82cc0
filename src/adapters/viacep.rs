use crate::domain::model::CityRecord;
use crate::domain::ports::CityResolver;
use crate::utils::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Directory provider response. An unknown CEP comes back as `200` with an
/// `erro` flag and no `localidade`, so the field is optional.
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    localidade: Option<String>,
}

/// City lookup against a ViaCEP-shaped directory service.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CityResolver for ViaCepClient {
    #[tracing::instrument(skip(self), fields(zipcode = %cep))]
    async fn resolve_city(&self, cep: &str) -> Result<CityRecord> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        tracing::debug!("requesting city lookup: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("directory provider returned status {}", status);
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: ViaCepResponse = response.json().await?;
        match body.localidade {
            Some(locality) if !locality.is_empty() => Ok(CityRecord {
                city_name: locality,
            }),
            _ => Err(WeatherError::NotFound),
        }
    }
}
