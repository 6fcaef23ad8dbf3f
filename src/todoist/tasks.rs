//! Task operations

use crate::todoist::client::{TodoistClient, item_path};
use crate::todoist::error::Result;
use crate::todoist::models::Task;
use crate::todoist::page::Endpoint;
use crate::todoist::payloads::{NewTask, TaskUpdate};
use crate::todoist::transport::Transport;
use tracing::instrument;

/// Server-side filters for listing active tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub project_id: Option<String>,
    /// Todoist filter expression, e.g. `today | overdue`.
    pub filter: Option<String>,
}

impl TaskQuery {
    /// Every active task.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_project(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            filter: None,
        }
    }

    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            project_id: None,
            filter: Some(filter.into()),
        }
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::new("/tasks")
            .param("project_id", self.project_id.as_deref())
            .param("filter", self.filter.as_deref())
    }
}

impl<T: Transport> TodoistClient<T> {
    /// List active tasks, draining every page.
    #[instrument(skip(self), err)]
    pub async fn get_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        self.get_all(&query.endpoint(), "tasks").await
    }

    #[instrument(skip(self), err)]
    pub async fn get_task(&self, id: &str) -> Result<Task> {
        self.get_record(&item_path("tasks", id), "task").await
    }

    #[instrument(skip(self, task), err)]
    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.post_record("/tasks", task, "task").await
    }

    #[instrument(skip(self, update), err)]
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task> {
        self.post_record(&item_path("tasks", id), update, "task").await
    }

    #[instrument(skip(self), err)]
    pub async fn delete_task(&self, id: &str) -> Result<()> {
        self.delete_record(&item_path("tasks", id)).await
    }

    /// Mark a task complete.
    #[instrument(skip(self), err)]
    pub async fn close_task(&self, id: &str) -> Result<()> {
        self.post_action(&format!("{}/close", item_path("tasks", id)))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn reopen_task(&self, id: &str) -> Result<()> {
        self.post_action(&format!("{}/reopen", item_path("tasks", id)))
            .await
    }
}
