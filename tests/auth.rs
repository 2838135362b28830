mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use taskgate::auth::{Claims, TokenService, TOKEN_LIFETIME_SECS};
use taskgate::store::seed_user;

use common::{forge_token, get_tasks, init_app, login_request, login_token, TEST_SECRET};

#[test_log::test(actix_rt::test)]
async fn test_login_with_correct_credentials_returns_token() {
    let app = init_app().await;
    let user = seed_user();

    let before = Utc::now().timestamp();
    let resp = test::call_service(&app, login_request(&user.email, &user.password)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token field");

    let claims = TokenService::new(TEST_SECRET)
        .unwrap()
        .decode_claims(token)
        .expect("token verifies with the server secret");
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.email, user.email);
    assert!(claims.exp >= before + TOKEN_LIFETIME_SECS);
    assert!(claims.exp <= Utc::now().timestamp() + TOKEN_LIFETIME_SECS);
}

#[actix_rt::test]
async fn test_login_failures_are_indistinguishable() {
    let app = init_app().await;
    let user = seed_user();

    let cases = vec![
        (user.email.clone(), "wrong-password".to_string()),
        ("someone@example.com".to_string(), user.password.clone()),
        ("someone@example.com".to_string(), "wrong-password".to_string()),
        (String::new(), String::new()),
        (user.email.to_uppercase(), user.password.clone()),
    ];

    for (email, password) in cases {
        let resp = test::call_service(&app, login_request(&email, &password)).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "credentials {:?}/{:?} should be rejected",
            email,
            password
        );
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Invalid credentials" }));
    }
}

#[actix_rt::test]
async fn test_login_with_malformed_body_is_bad_request() {
    let app = init_app().await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
}

#[actix_rt::test]
async fn test_login_without_json_body_is_invalid_credentials() {
    let app = init_app().await;

    let requests = vec![
        test::TestRequest::post().uri("/api/login").to_request(),
        test::TestRequest::post()
            .uri("/api/login")
            .insert_header(("Content-Type", "text/plain"))
            .set_payload("admin@example.com admin123")
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Invalid credentials" }));
    }
}

#[actix_rt::test]
async fn test_missing_authorization_header_is_unauthorized() {
    let app = init_app().await;

    let resp = test::call_service(&app, get_tasks(None)).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Access denied. No token." }));
}

#[actix_rt::test]
async fn test_garbage_token_is_bad_request() {
    let app = init_app().await;

    let resp = test::call_service(&app, get_tasks(Some("Bearer garbage"))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Invalid token" }));
}

#[actix_rt::test]
async fn test_header_without_token_word_is_bad_request() {
    let app = init_app().await;
    let token = login_token(&app).await;

    // the token alone, with no scheme word in front, is not found
    let resp = test::call_service(&app, get_tasks(Some(&token))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(&app, get_tasks(Some(""))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = init_app().await;
    let user = seed_user();

    let claims = Claims {
        id: user.id,
        email: user.email,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
    };
    let token = forge_token("not_the_server_secret", &claims);

    let resp = test::call_service(&app, get_tasks(Some(&format!("Bearer {}", token)))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_expired_token_is_rejected() {
    let app = init_app().await;
    let user = seed_user();

    let claims = Claims {
        id: user.id,
        email: user.email,
        exp: (Utc::now() - Duration::hours(2)).timestamp(),
    };
    let token = forge_token(TEST_SECRET, &claims);

    let resp = test::call_service(&app, get_tasks(Some(&format!("Bearer {}", token)))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Invalid token" }));
}

#[actix_rt::test]
async fn test_token_expired_seconds_ago_is_rejected() {
    let app = init_app().await;
    let user = seed_user();

    let claims = Claims {
        id: user.id,
        email: user.email,
        exp: (Utc::now() - Duration::seconds(5)).timestamp(),
    };
    let token = forge_token(TEST_SECRET, &claims);

    let resp = test::call_service(&app, get_tasks(Some(&format!("Bearer {}", token)))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Invalid token" }));
}

#[actix_rt::test]
async fn test_scheme_word_is_not_checked() {
    let app = init_app().await;
    let token = login_token(&app).await;

    for scheme in ["Bearer", "Token", "whatever"] {
        let header = format!("{} {}", scheme, token);
        let resp = test::call_service(&app, get_tasks(Some(&header))).await;
        assert_eq!(resp.status(), StatusCode::OK, "scheme {:?}", scheme);
    }
}

#[actix_rt::test]
async fn test_same_token_is_accepted_repeatedly() {
    let app = init_app().await;
    let token = login_token(&app).await;
    let header = format!("Bearer {}", token);

    for _ in 0..3 {
        let resp = test::call_service(&app, get_tasks(Some(&header))).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
