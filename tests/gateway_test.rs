use cep_weather::adapters::TemperatureServiceClient;
use cep_weather::http::gateway::{router, GatewayState};
use cep_weather::TemperatureResponse;
use httpmock::prelude::*;
use std::net::SocketAddr;

/// Boot the gateway on an ephemeral port, pointed at a mocked temperature
/// service.
async fn spawn_gateway(downstream: &MockServer) -> SocketAddr {
    let app = router(GatewayState {
        downstream: TemperatureServiceClient::new(downstream.base_url()),
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn forwards_original_cep_and_relays_response() {
    let downstream = MockServer::start();

    // The gateway validates the normalized form but must forward the
    // original, formatted code untouched.
    let downstream_mock = downstream.mock(|when, then| {
        when.method(GET)
            .path("/temperature")
            .query_param("cep", "01001-000");
        then.status(200).json_body(serde_json::json!({
            "temp_C": 22.0,
            "temp_F": 71.6,
            "temp_K": 295.15,
            "city": "São Paulo"
        }));
    });

    let addr = spawn_gateway(&downstream).await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{}/cep", addr))
        .json(&serde_json::json!({"cep": "01001-000"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: TemperatureResponse = resp.json().await.unwrap();
    assert_eq!(body.city, "São Paulo");
    assert_eq!(body.temp_c, 22.0);
    assert_eq!(body.temp_k, 295.15);

    downstream_mock.assert();
}

#[tokio::test]
async fn rejects_wrong_method() {
    let downstream = MockServer::start();
    let addr = spawn_gateway(&downstream).await;

    let resp = reqwest::get(format!("http://{}/cep", addr)).await.unwrap();
    assert_eq!(resp.status(), 405);
}

#[tokio::test]
async fn rejects_malformed_body() {
    let downstream = MockServer::start();
    let addr = spawn_gateway(&downstream).await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{}/cep", addr))
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn rejects_short_cep_before_any_downstream_call() {
    let downstream = MockServer::start();
    let downstream_mock = downstream.mock(|when, then| {
        when.path("/temperature");
        then.status(200);
    });

    let addr = spawn_gateway(&downstream).await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{}/cep", addr))
        .json(&serde_json::json!({"cep": "123"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 422);
    assert_eq!(resp.text().await.unwrap(), "invalid zipcode");
    downstream_mock.assert_hits(0);
}

#[tokio::test]
async fn downstream_not_found_surfaces_as_internal_error() {
    let downstream = MockServer::start();
    downstream.mock(|when, then| {
        when.method(GET).path("/temperature");
        then.status(404);
    });

    let addr = spawn_gateway(&downstream).await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{}/cep", addr))
        .json(&serde_json::json!({"cep": "00000000"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert!(resp.text().await.unwrap().contains("can not find zipcode data"));
}

#[tokio::test]
async fn downstream_server_error_surfaces_as_internal_error() {
    let downstream = MockServer::start();
    downstream.mock(|when, then| {
        when.method(GET).path("/temperature");
        then.status(503);
    });

    let addr = spawn_gateway(&downstream).await;
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{}/cep", addr))
        .json(&serde_json::json!({"cep": "05025000"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    assert!(resp.text().await.unwrap().contains("503"));
}
