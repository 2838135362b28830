use crate::{
    auth::{Identity, TokenService},
    error::AppError,
    models::{LoginRequest, LoginResponse},
    routes::parse_json_body,
    store::AppState,
};
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

/// Login user
///
/// Compares the submitted email and password with the configured account and
/// returns a signed token valid for one day. Any mismatch yields the same
/// `401 {"message": "Invalid credentials"}`, including a request without a
/// JSON body.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    tokens: web::Data<TokenService>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<impl Responder, AppError> {
    let login_data: LoginRequest = parse_json_body(&req, &body)?;
    let user = &state.user;

    if !user.matches_credentials(&login_data.email, &login_data.password) {
        log::warn!("failed login attempt");
        return Err(AppError::InvalidCredentials);
    }

    let token = tokens.issue(&Identity {
        id: user.id.clone(),
        email: user.email.clone(),
    })?;
    log::info!("user {} signed in", user.id);

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
