use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task record as held in memory and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Lookup key, unique within the store. Never changes.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form status, usually a string. Absent after an update that
    /// omitted it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Value>,
    /// Timestamp of the last update.
    pub updated_at: DateTime<Utc>,
}

/// Body of `PUT /api/tasks/{id}`.
///
/// Nothing is validated: any JSON value, or a missing field, is written to
/// the task as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub remarks: Option<Value>,
}

/// Response of a successful update.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskUpdated {
    pub message: String,
    pub task: Task,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: Some(Value::String(status.into())),
            remarks: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overwrites the mutable fields and stamps `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply(&mut self, update: TaskUpdate, now: DateTime<Utc>) {
        self.status = update.status;
        self.remarks = update.remarks;
        self.updated_at = now.max(self.updated_at);
    }
}
