pub mod auth;
pub mod tasks;

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, ResponseError};
use serde::de::DeserializeOwned;

use crate::auth::AuthMiddleware;
use crate::error::AppError;

/// Mounts the API routes. Callers place this under the `/api` scope.
///
/// `/login` is public; everything under `/tasks` goes through
/// `AuthMiddleware`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login).service(
        web::scope("/tasks")
            .wrap(AuthMiddleware)
            .service(tasks::get_tasks)
            .service(tasks::update_task),
    );
}

/// Reads an optional JSON request body.
///
/// A body that is empty or not sent as JSON is treated as `{}` and yields
/// `T::default()`. A JSON body that does not parse is a 400.
pub fn parse_json_body<T>(req: &HttpRequest, body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    let is_json = req.content_type().ends_with("json");
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Json deserialize error: {}", e)))
}

/// Fallback for paths that match no route.
pub async fn not_found() -> HttpResponse {
    AppError::NotFound("Not found".into()).error_response()
}
