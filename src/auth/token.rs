use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::error::AppError;

/// How long an issued token stays valid, in seconds.
pub const TOKEN_LIFETIME_SECS: i64 = 60 * 60 * 24; // 24 hours

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Identifier of the signed-in user.
    pub id: String,
    /// Email of the signed-in user.
    pub email: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    pub fn into_identity(self) -> Identity {
        Identity {
            id: self.id,
            email: self.email,
        }
    }
}

/// Issues and verifies HS256 tokens with one process-wide secret.
///
/// Nothing is stored server-side: a token stays valid until it expires and
/// cannot be revoked earlier.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Returns `AppError::Configuration` if the secret is empty or blank.
    pub fn new(secret: &str) -> Result<Self, AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::Configuration("JWT signing secret is empty".into()));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        // expiry is exact, no clock tolerance
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Signs a token for `identity` expiring one day from now.
    pub fn issue(&self, identity: &Identity) -> Result<String, AppError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::seconds(TOKEN_LIFETIME_SECS))
            .ok_or_else(|| AppError::InternalServerError("token expiry overflow".into()))?
            .timestamp();

        let claims = Claims {
            id: identity.id.clone(),
            email: identity.email.clone(),
            exp: expiration,
        };

        self.sign(&claims)
    }

    /// Signs arbitrary claims with the service key.
    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Checks signature and expiry and returns the full claim set.
    ///
    /// Bad signatures, undecodable payloads and expired tokens all come back
    /// as `AppError::InvalidToken`.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Verifies a token and recovers the identity embedded in it.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        self.decode_claims(token).map(Claims::into_identity)
    }
}
