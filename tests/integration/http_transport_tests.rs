use crate::common::{mock_config, mock_transport};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use wl_model::prelude::*;

fn request(endpoint: Endpoint, params: &[(&str, &str)]) -> ModelRequest {
    ModelRequest {
        endpoint,
        params: params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[tokio::test]
async fn test_get_sends_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("id_pay_owner".into(), "1".into()),
            Matcher::UrlEncoded("k_id".into(), "0".into()),
        ]))
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"ok","a_pay_address":{"s_name":"Jane"}}"#)
        .create_async()
        .await;

    let transport = mock_transport(&server.url());
    let payload = transport
        .call(&request(
            Endpoint::get("Wl/Pay/Address/Address.json"),
            &[("id_pay_owner", "1"), ("k_id", "0")],
        ))
        .await
        .unwrap();

    assert_json_eq!(
        payload,
        json!({"status": "ok", "a_pay_address": {"s_name": "Jane"}})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/Test/Quote/Quote.json")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("k_id".into(), "Q1".into()),
            Matcher::UrlEncoded("is_active".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let transport = mock_transport(&server.url());
    transport
        .call(&request(
            Endpoint::post("Test/Quote/Quote.json"),
            &[("k_id", "Q1"), ("is_active", "1")],
        ))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_status_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .with_status(200)
        .with_body(r#"{"status":"access-denied","message":"Access denied."}"#)
        .create_async()
        .await;

    let transport = mock_transport(&server.url());
    let err = transport
        .call(&request(Endpoint::get("Wl/Pay/Address/Address.json"), &[]))
        .await
        .unwrap_err();

    match err {
        TransportError::Server { status, message } => {
            assert_eq!(status, "access-denied");
            assert_eq!(message, "Access denied.");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_error_status_with_api_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .with_status(400)
        .with_body(r#"{"status":"pay-owner-invalid","message":"Unknown owner."}"#)
        .create_async()
        .await;

    let transport = mock_transport(&server.url());
    let err = transport
        .call(&request(Endpoint::get("Wl/Pay/Address/Address.json"), &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Server { .. }));
}

#[tokio::test]
async fn test_error_status_without_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let transport = mock_transport(&server.url());
    let err = transport
        .call(&request(Endpoint::get("Wl/Pay/Address/Address.json"), &[]))
        .await
        .unwrap_err();

    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_invalid_json_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let transport = mock_transport(&server.url());
    let err = transport
        .call(&request(Endpoint::get("Wl/Pay/Address/Address.json"), &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::InvalidPayload(_)));
}

#[tokio::test]
async fn test_too_many_requests_is_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .with_status(429)
        .expect(2)
        .create_async()
        .await;

    let transport = HttpTransport::new(mock_config(&server.url()))
        .unwrap()
        .with_retry(RetryConfig::with_max_retries(1).with_delay(0));
    let err = transport
        .call(&request(Endpoint::get("Wl/Pay/Address/Address.json"), &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::RateLimitExceeded));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/Wl/Pay/Address/Address.json")
        .with_status(200)
        .with_body(r#"{"status":"ok"}"#)
        .create_async()
        .await;

    let transport = mock_transport(&format!("{}/", server.url()));
    transport
        .call(&request(Endpoint::get("Wl/Pay/Address/Address.json"), &[]))
        .await
        .unwrap();

    mock.assert_async().await;
}
