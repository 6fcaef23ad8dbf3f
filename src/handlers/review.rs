//! Review and batch handlers for Todoist MCP server
//!
//! Inbox review, weekly review, task moves and bulk creation.

use crate::TodoistServerHandler;
use crate::formatting;
use crate::review::{InboxOutcome, MoveOutcome};
use crate::todoist::NewTask;
use crate::validation::{self, api_error, invalid_params, non_empty};
use mcp_attr::{Result as McpResult, bail_public};
use serde::Deserialize;
use serde_json::Value;

/// One entry of the `tasks` array accepted by `todoist_bulk_create_tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BulkTaskItem {
    pub content: String,
    pub description: Option<String>,
    pub due_string: Option<String>,
    pub priority: Option<i64>,
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub parent_id: Option<String>,
    pub labels: Option<Vec<String>>,
}

impl From<BulkTaskItem> for NewTask {
    fn from(item: BulkTaskItem) -> Self {
        NewTask {
            content: item.content,
            description: non_empty(item.description),
            due_string: non_empty(item.due_string),
            priority: validation::parse_priority(item.priority),
            project_id: non_empty(item.project_id),
            section_id: non_empty(item.section_id),
            parent_id: non_empty(item.parent_id),
            labels: item.labels.filter(|l| !l.is_empty()),
            assignee_id: None,
        }
    }
}

/// Decode the raw tool argument; any malformed entry rejects the whole batch.
pub fn parse_bulk_items(tasks: Vec<Value>) -> McpResult<Vec<NewTask>> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::from_value::<BulkTaskItem>(v)
                .map(NewTask::from)
                .map_err(|e| invalid_params(format!("Invalid task at index {}: {}", i, e)))
        })
        .collect()
}

impl TodoistServerHandler {
    /// **Process**: Inbox tasks grouped by when they were added.
    /// **When**: Daily. Older items are the first candidates to clarify or delete.
    ///
    /// An account without an Inbox project is reported as a tool error.
    pub async fn handle_inbox_review(&self) -> McpResult<String> {
        match self.client.inbox_review().await.map_err(api_error)? {
            InboxOutcome::Review(review) => Ok(formatting::format_inbox_review(&review)),
            InboxOutcome::MissingInbox => {
                bail_public!(
                    _,
                    "Could not find an Inbox project in this Todoist account"
                );
            }
        }
    }

    /// **Review**: Active task count per project, overdue tasks and undated tasks.
    ///
    /// If only the overdue lookup fails, the review is still returned with
    /// that section empty.
    pub async fn handle_weekly_review(&self) -> McpResult<String> {
        let review = self.client.weekly_review().await.map_err(api_error)?;
        Ok(formatting::format_weekly_review(&review))
    }

    /// **Organize**: Move a task to another project and/or section.
    ///
    /// # Arguments
    /// * `task_id` / `task_name` - Task reference, resolved like `handle_update_task`
    /// * `project_id` / `section_id` - Destination; at least one is required
    ///
    /// The task is resolved before the destination is checked, so an unknown
    /// name always reads "could not find".
    pub async fn handle_move_task(
        &self,
        task_id: Option<String>,
        task_name: Option<String>,
        project_id: Option<String>,
        section_id: Option<String>,
    ) -> McpResult<String> {
        let outcome = self
            .client
            .move_task(
                task_id.as_deref(),
                task_name.as_deref(),
                project_id.as_deref(),
                section_id.as_deref(),
            )
            .await
            .map_err(api_error)?;

        match outcome {
            MoveOutcome::Moved { label, task } => {
                let mut msg = format!("Task \"{}\" moved", label);
                if !task.project_id.is_empty() {
                    msg.push_str(&format!("\nProject: {}", task.project_id));
                }
                if let Some(ref section) = task.section_id {
                    msg.push_str(&format!("\nSection: {}", section));
                }
                Ok(msg)
            }
            MoveOutcome::NotFound => {
                bail_public!(
                    _,
                    "{}",
                    formatting::format_not_found(task_name.as_deref().unwrap_or_default())
                );
            }
        }
    }

    /// **Capture**: Create many tasks in one call, in order.
    ///
    /// Every entry is attempted even after a failure and nothing is rolled
    /// back. The report lists each entry; the call counts as an error when
    /// at least one entry failed. An empty array is a valid, empty batch.
    pub async fn handle_bulk_create_tasks(&self, tasks: Vec<Value>) -> McpResult<String> {
        let tasks = parse_bulk_items(tasks)?;
        let report = self
            .client
            .bulk_create_tasks(tasks)
            .await
            .map_err(api_error)?;

        let summary = formatting::format_bulk_report(&report);
        if report.is_error() {
            bail_public!(_, "{}", summary);
        }
        Ok(summary)
    }
}
