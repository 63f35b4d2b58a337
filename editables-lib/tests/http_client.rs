//! Transport client tests against a mock HTTP server.

use std::collections::HashMap;

use editables_lib::error::HttpError;
use editables_lib::http::HttpClient;
use editables_lib::ContentFormat;
use serde_json::json;
use serde_json::Value;
use wiremock::matchers::body_json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

fn client(server: &MockServer, route: &str) -> HttpClient {
    HttpClient::new(&format!("{}{}", server.uri(), route)).unwrap()
}

#[tokio::test]
async fn test_get_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "count": 42})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let value: Value = client(&server, "/data").get().await.unwrap();

    assert_eq!(value["count"], 42);
}

#[tokio::test]
async fn test_get_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let _: Value = client(&server, "/data").get().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_failure_status_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server, "/data").get::<Value>().await.unwrap_err();

    match err {
        HttpError::Response {
            status,
            message,
            url,
        } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
            assert_eq!(url, format!("{}/data", server.uri()));
        }
        other => panic!("expected a response error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server, "/data").get::<Value>().await.unwrap_err();

    assert!(matches!(err, HttpError::Transport { .. }));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_post_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"id": 300, "tags": ["a"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let value: Value = client(&server, "/search")
        .post(&json!({"id": 300, "tags": ["a"]}), ContentFormat::Json)
        .await
        .unwrap();

    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn test_post_unencodable_body_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut body = HashMap::new();
    body.insert((1, 2), "tuple keys are not JSON");

    let err = client(&server, "/search")
        .post::<Value, _>(&body, ContentFormat::Json)
        .await
        .unwrap_err();

    assert!(matches!(err, HttpError::BodyEncoding(_)));
}
