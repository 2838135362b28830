#![allow(dead_code)]

use actix_cors::Cors;
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{test, web, App, Error};
use serde_json::{json, Value};
use taskgate::auth::{Claims, TokenService};
use taskgate::routes;
use taskgate::store::{seed_user, AppState};

pub const TEST_SECRET: &str = "integration_test_secret";

/// Builds the full application with a fresh, seeded store.
pub async fn init_app(
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let tokens = web::Data::new(TokenService::new(TEST_SECRET).expect("valid secret"));
    let state = web::Data::new(AppState::seeded().expect("seed data is consistent"));

    test::init_service(
        App::new()
            .app_data(state)
            .app_data(tokens)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(web::scope("/api").configure(routes::config))
            .default_service(web::route().to(routes::not_found)),
    )
    .await
}

pub fn login_request(email: &str, password: &str) -> Request {
    test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request()
}

/// Logs in as the seeded account through the HTTP API and returns the token.
pub async fn login_token<S, B>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let user = seed_user();
    let resp = test::call_service(app, login_request(&user.email, &user.password)).await;
    assert!(resp.status().is_success(), "login failed: {}", resp.status());
    let body: Value = test::read_body_json(resp).await;
    body["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Signs arbitrary claims with `secret`, bypassing the login endpoint.
pub fn forge_token(secret: &str, claims: &Claims) -> String {
    TokenService::new(secret)
        .expect("valid secret")
        .sign(claims)
        .expect("token encodes")
}

pub fn get_tasks(authorization: Option<&str>) -> Request {
    let mut req = test::TestRequest::get().uri("/api/tasks");
    if let Some(value) = authorization {
        req = req.insert_header(("Authorization", value.to_string()));
    }
    req.to_request()
}

pub fn put_task(id: &str, token: &str, body: Value) -> Request {
    test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(body)
        .to_request()
}
