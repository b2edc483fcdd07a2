//! In-memory task store.
//!
//! Sole owner of all ToDo records. Enforces the title length bound and the
//! create-time title uniqueness rule, and answers the filter/sort queries.
//! Callers always receive clones — nothing outside this module can mutate a
//! stored task except through `update`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Inclusive title length bounds, in characters.
pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;

// ─── Types ───────────────────────────────────────────────────────────────────

/// One ToDo item.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards; `title`, `description`, and `done` are replaced wholesale
/// by `update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// None = no description.
    pub description: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a store operation was refused. Display strings double as the
/// `detail` field on the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Title must be 3-100 characters, got {0}.")]
    InvalidTitle(usize),
    #[error("Task title already exists.")]
    DuplicateTitle(String),
    #[error("Task not found - nothing to see here.")]
    NotFound(Uuid),
}

// ─── Store ───────────────────────────────────────────────────────────────────

pub struct TaskStore {
    /// id -> task
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    fn validate_title(title: &str) -> Result<(), StoreError> {
        let len = title.chars().count();
        if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len) {
            return Err(StoreError::InvalidTitle(len));
        }
        Ok(())
    }

    /// Create a task with a fresh id and `done = false`.
    ///
    /// Fails with `DuplicateTitle` if any stored task already carries an
    /// identical (case-sensitive) title; the collection is untouched on
    /// failure.
    pub async fn create(
        &self,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Task, StoreError> {
        let title = title.into();
        Self::validate_title(&title)?;

        let mut tasks = self.tasks.write().await;
        if tasks.values().any(|t| t.title == title) {
            return Err(StoreError::DuplicateTitle(title));
        }

        let task = Task {
            id: Uuid::new_v4(),
            title,
            description,
            done: false,
            created_at: Utc::now(),
        };
        debug!(id = %task.id, title = %task.title, "task created");
        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    /// Snapshot of every stored task, in map iteration order.
    pub async fn get_all(&self) -> Vec<Task> {
        self.tasks.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Task, StoreError> {
        self.tasks
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// All tasks, ascending by case-insensitive title.
    pub async fn get_sorted_by_title(&self) -> Vec<Task> {
        let mut list = self.get_all().await;
        list.sort_by_key(|t| t.title.to_lowercase());
        list
    }

    /// All tasks, earliest `created_at` first.
    pub async fn get_sorted_by_date(&self) -> Vec<Task> {
        let mut list = self.get_all().await;
        list.sort_by_key(|t| t.created_at);
        list
    }

    /// Tasks whose completion flag equals `done`.
    pub async fn get_by_done(&self, done: bool) -> Vec<Task> {
        self.tasks
            .read()
            .await
            .values()
            .filter(|t| t.done == done)
            .cloned()
            .collect()
    }

    /// Replace `title`, `description`, and `done` on an existing task.
    ///
    /// `id` and `created_at` are preserved. Title uniqueness is enforced at
    /// creation only — an update may introduce a duplicate title.
    pub async fn update(
        &self,
        id: Uuid,
        title: impl Into<String>,
        description: Option<String>,
        done: bool,
    ) -> Result<Task, StoreError> {
        let title = title.into();
        Self::validate_title(&title)?;

        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        task.title = title;
        task.description = description;
        task.done = done;
        debug!(id = %task.id, done = task.done, "task updated");
        Ok(task.clone())
    }

    /// Remove a task permanently.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        match tasks.remove(&id) {
            Some(task) => {
                debug!(id = %id, title = %task.title, "task deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper for use in `AppContext`.
pub type SharedTaskStore = Arc<TaskStore>;
