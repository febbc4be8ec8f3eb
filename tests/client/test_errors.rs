// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Failure contract: one generic "request failed" kind per operation

use super::stub_server::StubServer;
use pisky_client::{ClientConfig, ClientError, Operation, PiskyClient};

fn client_for(base_url: &str) -> PiskyClient {
    let config = ClientConfig {
        api_url: base_url.to_string(),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    PiskyClient::from_config(&config).expect("Failed to build client")
}

#[tokio::test]
async fn test_every_operation_has_fixed_message() {
    for status in [400_u16, 404, 500, 503] {
        let stub = StubServer::new()
            .route("GET", "/api/photographs?limit=50", status, "[]")
            .route("GET", "/api/photographs/1", status, "{}")
            .route("GET", "/api/stats", status, "{}")
            .route("POST", "/api/shoot", status, "{}")
            .route("GET", "/images/a.jpg", status, "");
        let client = client_for(&stub.start().await);

        let messages = [
            client.get_recent_photographs().await.unwrap_err().to_string(),
            client.get_photograph(1).await.unwrap_err().to_string(),
            client.get_stats().await.unwrap_err().to_string(),
            client.trigger_shoot().await.unwrap_err().to_string(),
            client.fetch_image("a.jpg").await.unwrap_err().to_string(),
        ];

        assert_eq!(
            messages,
            [
                "Failed to fetch photographs",
                "Failed to fetch photograph",
                "Failed to fetch stats",
                "Failed to trigger capture",
                "Failed to fetch image",
            ],
            "status {}",
            status
        );
    }
}

#[tokio::test]
async fn test_error_body_is_ignored() {
    let stub = StubServer::new().route(
        "GET",
        "/api/stats",
        500,
        r#"{"total_photographs": 12, "total_detections": 37}"#,
    );
    let client = client_for(&stub.start().await);

    let err = client.get_stats().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::RequestFailed {
            operation: Operation::GetStats
        }
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_request_failed() {
    let client = client_for("http://127.0.0.1:59999");

    let err = client.get_photograph(3).await.unwrap_err();

    assert!(err.is_request_failed());
    assert_eq!(err.to_string(), "Failed to fetch photograph");
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let stub = StubServer::new().route(
        "GET",
        "/api/photographs?limit=50",
        200,
        r#"{"photographs": []}"#,
    );
    let client = client_for(&stub.start().await);

    let err = client.get_recent_photographs().await.unwrap_err();

    assert!(!err.is_request_failed());
    assert_eq!(err.operation(), Some(Operation::ListPhotographs));
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = ClientConfig {
        api_url: "not a url".to_string(),
        ..ClientConfig::default()
    };
    assert!(matches!(
        PiskyClient::from_config(&config),
        Err(ClientError::InvalidUrl(_))
    ));
}
