//! Integration tests for `HttpAuthClient` against a mock auth backend.

use api::auth::OAuthToken;
use api::models::{GoogleRequest, LoginRequest, SignupRequest};
use api::{AuthBackend, AuthError, AuthFormController, FormField, HttpAuthClient, Routes};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "asha@example.org".to_string(),
        password: "secret1".to_string(),
    }
}

#[tokio::test]
async fn test_login_posts_json_credentials() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"email": "asha@example.org", "password": "secret1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    client.login(&login_request()).await.unwrap();
}

#[tokio::test]
async fn test_rejection_uses_backend_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let err = client.login(&login_request()).await.unwrap_err();
    assert!(matches!(err, AuthError::Rejected { status: 401, .. }));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_rejection_without_message_is_generic() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let err = client
        .signup(&SignupRequest {
            name: "Asha".to_string(),
            email: "asha@example.org".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Something went wrong");
}

#[tokio::test]
async fn test_non_json_response_is_generic_even_when_ok() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>gateway</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let err = client.login(&login_request()).await.unwrap_err();
    assert!(matches!(err, AuthError::NonJson { status: 200 }));
    assert_eq!(err.to_string(), "Server returned an error (check logs)");
}

#[tokio::test]
async fn test_json_content_type_with_charset_is_accepted() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(
            ResponseTemplate::new(201).set_body_raw(
                r#"{"message":"Verification email sent"}"#,
                "application/json; charset=utf-8",
            ),
        )
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let message = client
        .signup(&SignupRequest {
            name: "Asha".to_string(),
            email: "asha@example.org".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(message, "Verification email sent");
}

#[tokio::test]
async fn test_google_forwards_access_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .and(body_json(json!({"access_token": "ya29.token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"needsPasswordSetup": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let reply = client
        .google(&GoogleRequest::AccessToken {
            access_token: "ya29.token".to_string(),
        })
        .await
        .unwrap();
    assert!(reply.needs_password_setup);
}

#[tokio::test]
async fn test_google_rejection_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "denied"})))
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let err = client
        .google(&GoogleRequest::Credential {
            credential: "jwt".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Google Auth Failed");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let client = HttpAuthClient::new("http://127.0.0.1:9");
    let err = client.login(&login_request()).await.unwrap_err();
    assert!(matches!(err, AuthError::Network(_)));
}

#[tokio::test]
async fn test_controller_end_to_end_password_setup() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .and(body_json(json!({"credential": "id.token.sig"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"needsPasswordSetup": true})))
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let mut form = AuthFormController::login();
    let outcome = form
        .submit_oauth(&client, OAuthToken::Credential("id.token.sig".to_string()))
        .await
        .unwrap();
    assert_eq!(outcome.redirect(&Routes::default()), Some("/set-password"));
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_controller_null_password_flag_goes_to_dashboard() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"needsPasswordSetup": null})))
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let mut form = AuthFormController::login();
    let outcome = form
        .submit_oauth(&client, OAuthToken::Credential("id.token.sig".to_string()))
        .await
        .unwrap();
    assert_eq!(outcome.redirect(&Routes::default()), Some("/donor-dashboard"));
    assert_eq!(form.error(), None);
}

#[tokio::test]
async fn test_controller_validation_never_hits_server() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpAuthClient::new(server.uri());
    let mut form = AuthFormController::login();
    form.edit(FormField::Email, "foo@");
    form.edit(FormField::Password, "secret1");
    let err = form.submit_password(&client).await.unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid email");
}
