//! Integration tests for the Doorway HTTP client

use doorway_client::types::{LoginRequest, SignupRequest};
use doorway_client::{AuthenticatedClient, ClientError, PublicClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "user@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

#[tokio::test]
async fn login_resolves_with_user_and_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "user@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "user": {"id": 7, "email": "user@example.com", "username": "user"}
        })))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let response = client.login(login_request()).await.unwrap();

    assert_eq!(response.access_token, "tok-123");
    assert_eq!(response.user.id, 7);
    assert_eq!(response.user.email, "user@example.com");
    assert_eq!(response.user.username.as_deref(), Some("user"));
}

#[tokio::test]
async fn login_single_error_message_is_passed_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})),
        )
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let error = client.login(login_request()).await.unwrap_err();

    assert_eq!(error.to_string(), "Unauthorized");
    assert!(error.is_unauthorized());
}

#[tokio::test]
async fn login_message_list_is_bullet_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": ["A", "B"]
        })))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let error = client.login(login_request()).await.unwrap_err();

    assert_eq!(error.to_string(), "• A\n• B");
}

#[tokio::test]
async fn login_without_message_falls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"statusCode": 401})))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let error = client.login(login_request()).await.unwrap_err();

    assert_eq!(error.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn signup_sends_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .and(body_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "s3cret"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1, "email": "ada@example.com"
        })))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let response = client
        .signup(SignupRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response["email"], "ada@example.com");
}

#[tokio::test]
async fn signup_validation_errors_are_bullet_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": ["email must be an email", "password too short"]
        })))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let error = client
        .signup(SignupRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "• email must be an email\n• password too short"
    );
}

#[tokio::test]
async fn profile_sends_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "email": "user@example.com"
        })))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedClient::new(mock_server.uri(), "tok-123").unwrap();
    let profile = client.get_profile().await.unwrap();

    assert_eq!(profile["id"], 7);
}

#[tokio::test]
async fn profile_error_uses_fixed_message() {
    let mock_server = MockServer::start().await;

    // The backend message is deliberately ignored for this endpoint
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})),
        )
        .mount(&mock_server)
        .await;

    let client = AuthenticatedClient::new(mock_server.uri(), "stale").unwrap();
    let error = client.get_profile().await.unwrap_err();

    assert_eq!(error.to_string(), "Failed to fetch profile");
    assert!(matches!(error, ClientError::Api { status: 401, .. }));
}

#[tokio::test]
async fn base_url_trailing_slash_is_trimmed() {
    let client = PublicClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}
