#![doc = "The `taskgate` library crate."]
#![doc = ""]
#![doc = "A small task tracking API: one built-in account signs in for a token,"]
#![doc = "and token bearers can list tasks and update their status and remarks."]
#![doc = "The binary (`main.rs`) wires these modules into an actix-web server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::error::AppError;
pub use crate::store::AppState;
