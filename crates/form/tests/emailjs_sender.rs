//! EmailJS sender against a mock HTTP server.

use contact_form::{ContactPayload, ContactSender, EmailJsConfig, EmailJsSender, SendError};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> ContactPayload {
    ContactPayload {
        first_name: "Al".into(),
        last_name: "Li".into(),
        phone: "1234567890".into(),
        email: "al@gmail.com".into(),
    }
}

fn sender_for(server: &MockServer) -> EmailJsSender {
    let base = Url::parse(&format!("{}/", server.uri())).unwrap();
    let config = EmailJsConfig::new("service_test", "template_test", "public_key").with_base_url(base);
    EmailJsSender::new(config).unwrap()
}

#[tokio::test]
async fn posts_template_params_and_accepts_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "public_key",
            "template_params": {
                "firstName": "Al",
                "lastName": "Li",
                "phone": "1234567890",
                "email": "al@gmail.com",
            },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let sender = sender_for(&server);
    sender.send(&payload()).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_rejected_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
        .mount(&server)
        .await;

    let err = sender_for(&server).send(&payload()).await.unwrap_err();
    match err {
        SendError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "The user ID is invalid");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn access_token_is_forwarded_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "accessToken": "private" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/", server.uri())).unwrap();
    let config = EmailJsConfig::new("s", "t", "k")
        .with_base_url(base)
        .with_access_token("private");
    EmailJsSender::new(config)
        .unwrap()
        .send(&payload())
        .await
        .unwrap();
}
