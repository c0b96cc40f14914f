//! HTTP relay tests against a local mock server

mod common;

use common::fixtures::make_fields;
use common::mock_relay::{Notice, RecordingNotifier};
use folio_contact::config::{parse_endpoint, AccessKey, RelayConfig};
use folio_contact::error::Error;
use folio_contact::relay::{create_mail_relay, HttpMailRelay, MailRelay};
use folio_contact::submit::{messages, SubmissionController};
use folio_contact::types::{Field, SubmitOutcome};
use mockito::Matcher;
use std::sync::Arc;
use std::time::Duration;

const WIRE_DATA: &str = r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello","access_key":"test-key"}"#;

fn config_for(server: &mockito::ServerGuard) -> RelayConfig {
    RelayConfig {
        endpoint: parse_endpoint(&format!("{}/send-mail", server.url())).unwrap(),
        access_key: AccessKey::new("test-key"),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_posts_wrapped_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/send-mail")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({ "data": WIRE_DATA })))
        .with_status(200)
        .create_async()
        .await;

    let relay = HttpMailRelay::new(&config_for(&server)).unwrap();
    relay.send(&make_fields()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/send-mail")
        .with_status(202)
        .create_async()
        .await;

    let relay = HttpMailRelay::new(&config_for(&server)).unwrap();
    assert!(relay.send(&make_fields()).await.is_ok());
}

#[tokio::test]
async fn test_server_error_is_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/send-mail")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let relay = HttpMailRelay::new(&config_for(&server)).unwrap();
    let err = relay.send(&make_fields()).await.unwrap_err();

    assert!(matches!(err, Error::RelayStatus(500)), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_relay_is_http_error() {
    let config = RelayConfig {
        endpoint: parse_endpoint("http://127.0.0.1:9/send-mail").unwrap(),
        access_key: AccessKey::new("test-key"),
        timeout: Duration::from_secs(2),
    };

    let relay = HttpMailRelay::new(&config).unwrap();
    let err = relay.send(&make_fields()).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)), "{err:?}");
}

#[tokio::test]
async fn test_controller_over_http_reports_rejection() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/send-mail")
        .with_status(400)
        .expect(1)
        .create_async()
        .await;

    let relay = create_mail_relay(&config_for(&server)).unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let controller = SubmissionController::new(relay, notifier.clone());
    for field in Field::ALL {
        controller.edit(field, make_fields().get(field));
    }

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(
        notifier.notices().last(),
        Some(&Notice::Error(messages::RELAY_FAILED.to_string()))
    );
    assert_eq!(controller.snapshot().fields, make_fields());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_controller_over_http_delivers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/send-mail")
        .match_body(Matcher::PartialJsonString(format!(
            "{{\"data\": {}}}",
            serde_json::to_string(WIRE_DATA).unwrap()
        )))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let relay = create_mail_relay(&config_for(&server)).unwrap();
    let controller = SubmissionController::new(relay, Arc::new(RecordingNotifier::default()));
    for field in Field::ALL {
        controller.edit(field, make_fields().get(field));
    }

    assert_eq!(controller.submit().await, SubmitOutcome::Sent);
    mock.assert_async().await;
}
