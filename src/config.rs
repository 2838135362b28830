use std::env;

use crate::error::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Runtime settings read from the environment at startup.
pub struct Config {
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// `JWT_SECRET` is mandatory and must not be blank. `SERVER_HOST` and
    /// `SERVER_PORT` fall back to `127.0.0.1:8080`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| AppError::Configuration("JWT_SECRET must be set".into()))?;

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.trim().parse().map_err(|_| {
                AppError::Configuration(format!("SERVER_PORT must be a number, got {:?}", port))
            })?,
            None => DEFAULT_PORT,
        };

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            jwt_secret,
            server_host,
            server_port,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server_host.clone(), self.server_port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
