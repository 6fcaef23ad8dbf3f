//! Task handlers for Todoist MCP server

use crate::TodoistServerHandler;
use crate::formatting;
use crate::todoist::{NewTask, Resolution, TaskQuery, TaskUpdate};
use crate::validation::{self, api_error, non_empty};
use mcp_attr::{Result as McpResult, bail_public};

/// A task action addressed by id or by name.
#[derive(Debug, Clone, Copy)]
enum TaskAction {
    Delete,
    Complete,
    Reopen,
}

impl TaskAction {
    fn past_tense(self) -> &'static str {
        match self {
            TaskAction::Delete => "deleted",
            TaskAction::Complete => "completed",
            TaskAction::Reopen => "reopened",
        }
    }
}

impl TodoistServerHandler {
    /// Resolve `task_id`/`task_name`, turning "no match" into a visible
    /// tool error rather than an API failure.
    async fn resolve_or_bail(
        &self,
        task_id: Option<String>,
        task_name: Option<String>,
    ) -> McpResult<(String, String)> {
        let resolution = self
            .client
            .resolve_task(task_id.as_deref(), task_name.as_deref())
            .await
            .map_err(api_error)?;

        match resolution {
            Resolution::NotFound => {
                bail_public!(
                    _,
                    "{}",
                    formatting::format_not_found(task_name.as_deref().unwrap_or_default())
                );
            }
            found => {
                let id = found.id().unwrap_or_default().to_string();
                let label = found.label().unwrap_or_default().to_string();
                Ok((id, label))
            }
        }
    }

    /// **Capture**: Create a task. Lands in the Inbox unless a project is given.
    ///
    /// Blank optional strings are treated as absent and a priority outside
    /// 1-4 is dropped, so neither reaches the API.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_create_task(
        &self,
        content: String,
        description: Option<String>,
        due_string: Option<String>,
        priority: Option<i64>,
        project_id: Option<String>,
        section_id: Option<String>,
        parent_id: Option<String>,
        labels: Option<Vec<String>>,
        assignee_id: Option<String>,
    ) -> McpResult<String> {
        validation::require("content", &content)?;

        let task = NewTask {
            content,
            description: non_empty(description),
            due_string: non_empty(due_string),
            priority: validation::parse_priority(priority),
            project_id: non_empty(project_id),
            section_id: non_empty(section_id),
            parent_id: non_empty(parent_id),
            labels: labels.filter(|l| !l.is_empty()),
            assignee_id: non_empty(assignee_id),
        };

        let created = self.client.create_task(&task).await.map_err(api_error)?;
        Ok(formatting::format_task_created(&created))
    }

    /// Lists tasks from the API, then applies the priority filter and limit locally.
    ///
    /// # Arguments
    /// * `project_id` / `filter` - Sent to the API as query parameters
    /// * `priority` - Exact priority to keep; ignored outside 1-4
    /// * `limit` - Maximum tasks shown, 10 when absent or not positive
    pub async fn handle_get_tasks(
        &self,
        project_id: Option<String>,
        filter: Option<String>,
        priority: Option<i64>,
        limit: Option<i64>,
    ) -> McpResult<String> {
        let query = TaskQuery {
            project_id: non_empty(project_id),
            filter: non_empty(filter),
        };
        let mut tasks = self.client.get_tasks(&query).await.map_err(api_error)?;

        if let Some(p) = validation::parse_priority(priority) {
            formatting::apply_priority_filter(&mut tasks, p);
        }
        formatting::apply_limit(&mut tasks, validation::parse_limit(limit));

        Ok(formatting::format_task_list(&tasks))
    }

    /// Full details of one task, addressed by id only.
    pub async fn handle_get_task(&self, task_id: String) -> McpResult<String> {
        validation::require("task_id", &task_id)?;
        let task = self.client.get_task(&task_id).await.map_err(api_error)?;
        Ok(formatting::format_task(&task))
    }

    /// **Update**: Change fields of a task found by id or by name.
    ///
    /// # Arguments
    /// * `task_id` - Used as-is when non-empty; no lookup request is made
    /// * `task_name` - Otherwise, exact then partial case-insensitive match on content
    /// * remaining fields - Only the ones supplied are sent
    ///
    /// A name that matches nothing is reported as "could not find", not as an API error.
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_update_task(
        &self,
        task_id: Option<String>,
        task_name: Option<String>,
        content: Option<String>,
        description: Option<String>,
        due_string: Option<String>,
        priority: Option<i64>,
        labels: Option<Vec<String>>,
        assignee_id: Option<String>,
    ) -> McpResult<String> {
        let (id, label) = self.resolve_or_bail(task_id, task_name).await?;

        let update = TaskUpdate {
            content: non_empty(content),
            description: non_empty(description),
            due_string: non_empty(due_string),
            priority: validation::parse_priority(priority),
            labels: labels.filter(|l| !l.is_empty()),
            assignee_id: non_empty(assignee_id),
            ..Default::default()
        };

        let updated = self
            .client
            .update_task(&id, &update)
            .await
            .map_err(api_error)?;
        Ok(formatting::format_task_updated(&label, &updated))
    }

    async fn task_action(
        &self,
        action: TaskAction,
        task_id: Option<String>,
        task_name: Option<String>,
    ) -> McpResult<String> {
        let (id, label) = self.resolve_or_bail(task_id, task_name).await?;

        let result = match action {
            TaskAction::Delete => self.client.delete_task(&id).await,
            TaskAction::Complete => self.client.close_task(&id).await,
            TaskAction::Reopen => self.client.reopen_task(&id).await,
        };
        result.map_err(api_error)?;

        Ok(format!(
            "Successfully {} task: \"{}\"",
            action.past_tense(),
            label
        ))
    }

    /// Delete a task found by `task_id` or `task_name`.
    pub async fn handle_delete_task(
        &self,
        task_id: Option<String>,
        task_name: Option<String>,
    ) -> McpResult<String> {
        self.task_action(TaskAction::Delete, task_id, task_name)
            .await
    }

    /// **Done**: Close a task found by `task_id` or `task_name`.
    /// Recurring tasks move to their next occurrence instead.
    pub async fn handle_complete_task(
        &self,
        task_id: Option<String>,
        task_name: Option<String>,
    ) -> McpResult<String> {
        self.task_action(TaskAction::Complete, task_id, task_name)
            .await
    }

    /// Reopen a completed task found by `task_id` or `task_name`.
    pub async fn handle_reopen_task(
        &self,
        task_id: Option<String>,
        task_name: Option<String>,
    ) -> McpResult<String> {
        self.task_action(TaskAction::Reopen, task_id, task_name)
            .await
    }
}
