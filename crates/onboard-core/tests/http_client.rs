//! SignupClient against a mock HTTP server
//!
//! Verifies the wire contract: method, path, JSON body, and how response
//! statuses and bodies map onto SignupError.

use std::net::TcpListener;

use httpmock::prelude::*;
use onboard_core::{
    ClientConfig, SignupApi, SignupClient, SignupError, SignupForm, SignupSession, SubmitOutcome,
    Toasts,
};
use serde_json::json;

fn alice() -> SignupForm {
    SignupForm::new("alice", "alice@example.com", "Passw0rd", "Passw0rd")
}

fn client_for(server: &MockServer) -> SignupClient {
    let config = ClientConfig::new(&server.base_url()).expect("mock server URL");
    SignupClient::new(config).expect("client")
}

#[tokio::test]
async fn test_posts_raw_fields_to_signup_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/users/signup")
                .json_body(json!({
                    "email": "alice@example.com",
                    "username": "alice",
                    "password": "Passw0rd",
                    "confirm": "Passw0rd",
                }));
            then.status(200).json_body(json!({ "id": 1 }));
        })
        .await;

    let client = client_for(&server);
    let result = client.signup(&alice().to_request()).await;

    assert_eq!(result, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejection_carries_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/signup");
            then.status(400)
                .json_body(json!({ "message": "Email already taken" }));
        })
        .await;

    let client = client_for(&server);
    let result = client.signup(&alice().to_request()).await;

    assert_eq!(
        result,
        Err(SignupError::Rejected {
            status: 400,
            reason: Some("Email already taken".to_string()),
        })
    );
}

#[tokio::test]
async fn test_rejection_without_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/signup");
            then.status(500);
        })
        .await;

    let client = client_for(&server);
    let err = client.signup(&alice().to_request()).await.unwrap_err();

    assert_eq!(
        err,
        SignupError::Rejected {
            status: 500,
            reason: None,
        }
    );
    assert_eq!(err.notification_text(), "An error occurred during signup");
}

#[tokio::test]
async fn test_non_200_success_status_is_not_accepted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/signup");
            then.status(201);
        })
        .await;

    let client = client_for(&server);
    let result = client.signup(&alice().to_request()).await;

    assert!(matches!(result, Err(SignupError::Rejected { status: 201, .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ClientConfig::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let client = SignupClient::new(config).unwrap();

    let err = client.signup(&alice().to_request()).await.unwrap_err();

    assert!(matches!(err, SignupError::Network(_)));
    assert_eq!(err.notification_text(), "An error occurred during signup");
}

#[tokio::test]
async fn test_session_issues_exactly_one_post() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/signup");
            then.status(200);
        })
        .await;

    let client = client_for(&server);
    let mut session = SignupSession::new();
    let mut toasts = Toasts::default();

    let outcome = session.submit(&alice(), &client, &mut toasts).await;

    assert!(matches!(outcome, SubmitOutcome::Succeeded { redirect_to: "/login" }));
    assert_eq!(mock.hits_async().await, 1);
    assert_eq!(toasts.iter().next().unwrap().text, "Signup successful!");
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/signup");
            then.status(200);
        })
        .await;

    let client = client_for(&server);
    let mut session = SignupSession::new();
    let mut toasts = Toasts::default();

    let form = SignupForm::new("alice", "alice@example.com", "Passw0rd", "Passw0rd!");
    session.submit(&form, &client, &mut toasts).await;

    assert_eq!(mock.hits_async().await, 0);
}
