//! In-memory state shared by every request: the sign-in account and the task
//! list. Nothing here is persisted; the data lives until the process exits.

use std::collections::HashSet;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::{Task, TaskUpdate, User};

/// Application state handed to handlers through `web::Data<AppState>`.
pub struct AppState {
    pub user: User,
    pub tasks: TaskStore,
}

impl AppState {
    pub fn new(user: User, tasks: Vec<Task>) -> Result<Self, AppError> {
        Ok(Self {
            user,
            tasks: TaskStore::new(tasks)?,
        })
    }

    /// State populated with the built-in account and task list.
    pub fn seeded() -> Result<Self, AppError> {
        Self::new(seed_user(), seed_tasks())
    }
}

/// The task collection behind a single-writer lock.
///
/// Concurrent updates to the same id are applied in lock order; the last one
/// wins and there is no version check.
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    /// Fails if two tasks share an id.
    pub fn new(tasks: Vec<Task>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(AppError::Configuration(format!(
                    "duplicate task id {:?} in task store",
                    task.id
                )));
            }
        }
        Ok(Self {
            tasks: RwLock::new(tasks),
        })
    }

    /// Snapshot of every task in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    /// Applies `update` to the task with the given id and returns the new
    /// record, or `None` if no such task exists.
    pub async fn update(&self, id: &str, update: TaskUpdate) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.iter_mut().find(|task| task.id == id)?;
        task.apply(update, Utc::now());
        Some(task.clone())
    }
}

pub fn seed_user() -> User {
    User::new("1", "admin@example.com", "admin123")
}

pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("1", "Prepare quarterly report", "pending")
            .with_description("Collect figures from finance and draft the summary"),
        Task::new("2", "Review pull requests", "in-progress")
            .with_description("Go through the open review queue"),
        Task::new("3", "Update onboarding docs", "pending"),
        Task::new("4", "Renew TLS certificates", "completed")
            .with_description("Staging and production load balancers"),
    ]
}
