use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::{Identity, TokenService};
use crate::error::AppError;

/// Gate for protected routes.
///
/// Requires an `Authorization: <scheme> <token>` header whose token verifies
/// against the `TokenService` registered as app data. The scheme word is not
/// checked. On success the recovered `Identity` is stored in the request
/// extensions; otherwise the middleware answers the request itself:
/// 401 when the header is absent, 400 for any token that does not verify.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(app_err) => {
                log::debug!("rejected {} {}: {}", req.method(), req.path(), app_err);
                let response: ServiceResponse<EitherBody<B>> = req
                    .into_response(app_err.error_response())
                    .map_into_right_body();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

/// Runs the header and token checks for one request.
fn authenticate(req: &ServiceRequest) -> Result<Identity, AppError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::MissingToken)?;

    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalServerError("TokenService is not registered".into()))?;

    let value = header_value.to_str().map_err(|_| AppError::InvalidToken)?;
    let token = credential_token(value).ok_or(AppError::InvalidToken)?;

    tokens.verify(token)
}

/// Returns the second whitespace-delimited word of an `Authorization`
/// header value, whatever the first word is.
pub fn credential_token(header_value: &str) -> Option<&str> {
    header_value.split_whitespace().nth(1)
}
