//! Token issuance, verification and the request gate built on top of them.

pub mod extractors;
pub mod middleware;
pub mod token;

pub use extractors::Identity;
pub use middleware::AuthMiddleware;
pub use token::{Claims, TokenService, TOKEN_LIFETIME_SECS};
