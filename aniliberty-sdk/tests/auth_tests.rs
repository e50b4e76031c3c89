mod common;

use aniliberty_sdk::{ApiResponse, LoginRequest, ResetPasswordRequest, UserSocialType};
use common::client_for;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_stores_token_for_next_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/login"))
        .and(body_json(json!({"login": "user@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/users/me/favorites/ids"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([9000, 42])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let login = client
        .auth()
        .login(&LoginRequest::new("user@example.com", "hunter2"))
        .await;

    assert!(login.is_success());
    assert_eq!(login.data().unwrap().token, "abc");
    assert_eq!(client.access_token().as_deref(), Some("abc"));

    let ids = client.favorites().ids().await;
    assert_eq!(ids.into_data(), Some(vec![9000, 42]));
}

#[tokio::test]
async fn test_failed_login_leaves_session_unauthenticated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let login = client
        .auth()
        .login(&LoginRequest::new("user", "wrong"))
        .await;

    assert_eq!(login.status(), 401);
    assert_eq!(
        login.error().unwrap().message.as_deref(),
        Some("Invalid credentials")
    );
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_token_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/logout"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_access_token("abc");

    let logout = client.auth().logout().await;
    assert!(logout.is_success());
    assert!(logout.data().unwrap().token.is_none());
    assert!(client.access_token().is_none());
}

#[tokio::test]
async fn test_logout_clears_token_even_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_access_token("abc");

    let logout = client.auth().logout().await;
    assert_eq!(logout.status(), 500);
    assert!(!client.is_authenticated());

    // Following calls go out without credentials
    Mock::given(method("GET"))
        .and(path("/v1/app/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request": {"ip": "127.0.0.1", "country": "RU", "iso_code": "RU", "timezone": "Europe/Moscow"},
            "is_alive": true,
            "available_api_endpoints": ["https://aniliberty.top/api/v1"]
        })))
        .mount(&server)
        .await;

    let status = client.app().status().await;
    assert!(status.data().unwrap().is_alive);

    let requests = server.received_requests().await.unwrap();
    let last = requests.last().unwrap();
    assert!(last.headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_new_token_overwrites_previous() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "fresh"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_access_token("stale");

    let _ = client.auth().login(&LoginRequest::new("u", "p")).await;
    assert_eq!(client.access_token().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn test_otp_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/otp/get"))
        .and(body_json(json!({"device_id": "tv-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "otp": {
                "code": "123456",
                "user_id": null,
                "device_id": "tv-1",
                "expired_at": "2024-10-01T00:05:00+00:00"
            },
            "remaining_time": 300
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/otp/login"))
        .and(body_json(json!({"code": "123456", "device_id": "tv-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "otp-token"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/users/me/collections/ids"))
        .and(header("authorization", "Bearer otp-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[1, "PLANNED"]])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let otp = client.otp().get("tv-1").await.into_data().unwrap();
    assert_eq!(otp.otp.code, "123456");
    assert!(otp.otp.user_id.is_none());
    assert_eq!(otp.remaining_time, 300);

    let login = client.otp().login(otp.otp.code, "tv-1").await;
    assert!(login.is_success());
    assert_eq!(client.access_token().as_deref(), Some("otp-token"));

    let ids = client.collections().ids().await;
    assert_eq!(ids.into_data().unwrap().len(), 1);
}

#[tokio::test]
async fn test_otp_accept_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/otp/accept"))
        .and(body_json(json!({"code": "123456"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let accepted = client.otp().accept("123456").await;

    assert!(matches!(
        accepted,
        ApiResponse::Success {
            status: 204,
            data: None
        }
    ));
}

#[tokio::test]
async fn test_social_sign_in() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/users/auth/social/discord/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://discord.com/oauth2/authorize?client_id=1",
            "state": "st-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/users/auth/social/authenticate"))
        .and(query_param("state", "st-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "social"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts/users/me/favorites/ids"))
        .and(header("authorization", "Bearer social"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([7])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let redirect = client
        .auth()
        .social_login(UserSocialType::Discord)
        .await
        .into_data()
        .unwrap();
    assert!(redirect.url.starts_with("https://discord.com"));

    let auth = client.auth().social_authenticate(&redirect.state).await;
    assert!(auth.is_success());
    assert_eq!(client.access_token().as_deref(), Some("social"));

    let ids = client.favorites().ids().await;
    assert_eq!(ids.into_data(), Some(vec![7]));
}

#[tokio::test]
async fn test_password_recovery_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/password/reset"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {
                "password": ["The password confirmation does not match."],
                "token": ["The token is invalid."]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reset = client
        .auth()
        .reset_password(&ResetPasswordRequest {
            token: "t".into(),
            password: "a".into(),
            password_confirmation: "b".into(),
        })
        .await;

    assert_eq!(reset.status(), 422);
    let error = reset.error().unwrap();
    assert!(error.is_validation());
    assert_eq!(error.field_errors("token").unwrap(), ["The token is invalid."]);
}

#[tokio::test]
async fn test_forget_password_sends_email() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/users/auth/password/forget"))
        .and(body_json(json!({"email": "user@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sent = client.auth().forget_password("user@example.com").await;
    assert!(sent.is_success());
}
