pub mod task;
pub mod user;

pub use task::{Task, TaskUpdate, TaskUpdated};
pub use user::{LoginRequest, LoginResponse, User};
