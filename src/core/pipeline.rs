use crate::domain::model::TemperatureResponse;
use crate::domain::ports::{CityResolver, TemperatureResolver};
use crate::utils::error::WeatherError;
use thiserror::Error;

/// A lookup failure tagged with the stage that produced it, so the HTTP
/// layer can map city-stage and temperature-stage failures to different
/// status codes.
#[derive(Error, Debug)]
pub enum LookupFailure {
    #[error("can not find zipcode")]
    City(#[source] WeatherError),

    #[error("error fetching temperature")]
    Temperature(#[source] WeatherError),
}

/// The two-stage lookup: postal code -> city -> current temperature.
///
/// Stages run strictly in sequence; the temperature lookup cannot begin
/// until the city lookup completes because its input depends on the city.
/// First failure at any stage short-circuits, and a temperature-stage
/// failure discards the already-resolved city.
pub struct WeatherPipeline<C, T> {
    city: C,
    temperature: T,
}

impl<C, T> WeatherPipeline<C, T>
where
    C: CityResolver,
    T: TemperatureResolver,
{
    pub fn new(city: C, temperature: T) -> Self {
        Self { city, temperature }
    }

    #[tracing::instrument(skip(self), fields(zipcode = %cep))]
    pub async fn lookup(&self, cep: &str) -> Result<TemperatureResponse, LookupFailure> {
        let record = self
            .city
            .resolve_city(cep)
            .await
            .map_err(LookupFailure::City)?;

        tracing::debug!(city = %record.city_name, "resolved city");

        let reading = self
            .temperature
            .resolve_temperature(&record.city_name)
            .await
            .map_err(LookupFailure::Temperature)?;

        tracing::debug!(celsius = reading.celsius, "resolved temperature");

        Ok(TemperatureResponse::from_celsius(
            record.city_name,
            reading.celsius,
        ))
    }
}
