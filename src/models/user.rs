use serde::{Deserialize, Serialize};

/// The single account allowed to sign in.
///
/// The password is held and compared in plain text.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks a submitted email/password pair against this account.
    ///
    /// Both comparisons are always evaluated so a wrong email and a wrong
    /// password take the same path.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        let email_ok = self.email == email;
        let password_ok = self.password == password;
        email_ok & password_ok
    }
}

/// Body of `POST /api/login`. Missing fields count as empty strings, which
/// never match the account.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
