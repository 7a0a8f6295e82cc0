use crate::core::pipeline::{LookupFailure, WeatherPipeline};
use crate::domain::ports::{CityResolver, TemperatureResolver};
use crate::utils::validation::{normalize_cep, CEP_LEN};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub struct TemperatureState<C, T> {
    pub pipeline: Arc<WeatherPipeline<C, T>>,
}

impl<C, T> Clone for TemperatureState<C, T> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TemperatureQuery {
    cep: Option<String>,
}

pub fn router<C, T>(state: TemperatureState<C, T>) -> Router
where
    C: CityResolver + 'static,
    T: TemperatureResolver + 'static,
{
    Router::new()
        .route("/temperature", any(temperature_handler::<C, T>))
        .with_state(state)
}

/// `GET /temperature?cep=<code>`.
///
/// Normalizes and validates independently of the gateway, then runs the
/// two-stage lookup. City-stage failures map to 404, temperature-stage
/// failures to 500.
#[tracing::instrument(skip_all)]
async fn temperature_handler<C, T>(
    State(state): State<TemperatureState<C, T>>,
    method: Method,
    Query(query): Query<TemperatureQuery>,
) -> Response
where
    C: CityResolver + 'static,
    T: TemperatureResolver + 'static,
{
    if method != Method::GET {
        let message = "method is not supported";
        tracing::error!(%method, "{}", message);
        return (StatusCode::NOT_FOUND, message).into_response();
    }

    let cep = query.cep.unwrap_or_default();
    let normalized = normalize_cep(&cep);
    if normalized.len() != CEP_LEN {
        let message = "invalid zipcode";
        tracing::error!(zipcode = %cep, "{}", message);
        return (StatusCode::UNPROCESSABLE_ENTITY, message).into_response();
    }

    match state.pipeline.lookup(&normalized).await {
        Ok(response) => {
            tracing::info!(zipcode = %normalized, city = %response.city, "lookup succeeded");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(failure) => {
            let status = match &failure {
                LookupFailure::City(_) => StatusCode::NOT_FOUND,
                LookupFailure::Temperature(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::error!(error = %failure, zipcode = %normalized, "lookup failed");
            (status, failure.to_string()).into_response()
        }
    }
}
