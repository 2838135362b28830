use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The authenticated caller, recovered from a verified token.
///
/// `AuthMiddleware` stores it in the request extensions; handlers behind the
/// middleware can take it as an argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

impl FromRequest for Identity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Identity>().cloned() {
            Some(identity) => ready(Ok(identity)),
            // Only reachable when a route is mounted outside the auth gate.
            None => ready(Err(AppError::MissingToken.into())),
        }
    }
}
