use crate::adapters::downstream::{downstream_error_message, TemperatureServiceClient};
use crate::domain::model::CepRequest;
use crate::utils::validation::{normalize_cep, CEP_LEN};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};

#[derive(Clone)]
pub struct GatewayState {
    pub downstream: TemperatureServiceClient,
}

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/cep", any(cep_handler))
        .with_state(state)
}

/// `POST /cep` with body `{"cep": "<string>"}`.
///
/// Validates the normalized code locally but forwards the original,
/// unnormalized code downstream; the temperature service re-validates.
#[tracing::instrument(skip_all)]
async fn cep_handler(
    State(state): State<GatewayState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        let message = "method not allowed";
        tracing::error!(%method, "{}", message);
        return (StatusCode::METHOD_NOT_ALLOWED, message).into_response();
    }

    let request: CepRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            let message = "error decoding request body";
            tracing::error!(error = %e, "{}", message);
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let normalized = normalize_cep(&request.cep);
    if normalized.len() != CEP_LEN {
        let message = "invalid zipcode";
        tracing::error!(zipcode = %request.cep, "{}", message);
        return (StatusCode::UNPROCESSABLE_ENTITY, message).into_response();
    }

    match state.downstream.fetch_temperature(&request.cep).await {
        Ok(response) => {
            tracing::info!(zipcode = %normalized, city = %response.city, "lookup succeeded");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let message = downstream_error_message(&e);
            tracing::error!(error = %e, "{}", message);
            (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
        }
    }
}
