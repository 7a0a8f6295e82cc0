use crate::domain::model::TemperatureResponse;
use crate::utils::error::{Result, WeatherError};
use reqwest::{Client, StatusCode};

/// Gateway-side client for the temperature service hop.
///
/// The original (unnormalized) cep is forwarded as-is; the temperature
/// service performs its own normalization and validation.
#[derive(Debug, Clone)]
pub struct TemperatureServiceClient {
    client: Client,
    base_url: String,
}

impl TemperatureServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[tracing::instrument(skip(self), fields(zipcode = %cep))]
    pub async fn fetch_temperature(&self, cep: &str) -> Result<TemperatureResponse> {
        let url = format!("{}/temperature", self.base_url);
        tracing::debug!("calling temperature service: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("cep", cep)])
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body: TemperatureResponse = response.json().await?;
                Ok(body)
            }
            StatusCode::NOT_FOUND => {
                tracing::debug!("temperature service could not find zipcode data");
                Err(WeatherError::NotFound)
            }
            other => {
                tracing::debug!("temperature service returned status {}", other);
                Err(WeatherError::Upstream {
                    status: other.as_u16(),
                })
            }
        }
    }
}

/// Human-readable message for a failed downstream call, carried back to the
/// gateway's caller in the 500 body.
pub fn downstream_error_message(err: &WeatherError) -> String {
    match err {
        WeatherError::NotFound => {
            "temperature service returned status 404 - can not find zipcode data".to_string()
        }
        WeatherError::Upstream { status: 422 } => {
            "temperature service returned status 422 - invalid zipcode".to_string()
        }
        WeatherError::Upstream { status } => {
            format!("temperature service returned status {}", status)
        }
        other => format!("error calling temperature service: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downstream_messages_distinguish_known_statuses() {
        assert!(downstream_error_message(&WeatherError::NotFound).contains("404"));
        assert!(
            downstream_error_message(&WeatherError::Upstream { status: 422 })
                .contains("invalid zipcode")
        );
        assert!(
            downstream_error_message(&WeatherError::Upstream { status: 503 }).contains("503")
        );
    }
}
