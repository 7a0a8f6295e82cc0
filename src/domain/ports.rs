use crate::domain::model::{CityRecord, TemperatureReading};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a postal code to a city via an external directory service.
///
/// Callers supply an already-validated 8-digit code; the resolver does not
/// re-check length, it only surfaces whatever the provider answers.
#[async_trait]
pub trait CityResolver: Send + Sync {
    async fn resolve_city(&self, cep: &str) -> Result<CityRecord>;
}

/// Resolves a city name to a current Celsius temperature via an external
/// weather service.
#[async_trait]
pub trait TemperatureResolver: Send + Sync {
    async fn resolve_temperature(&self, city: &str) -> Result<TemperatureReading>;
}
