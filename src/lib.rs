//! Todoist MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for the
//! Todoist task manager. It wraps the Todoist REST API with typed resource
//! operations, task lookup by name, and GTD-style review tools.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoistServerHandler` - Handles MCP protocol communication
//! - **Aggregation Layer**: `review` module - Inbox/weekly reviews, moves, bulk creation
//! - **Gateway Layer**: `todoist` module - Authenticated HTTP, pagination, resources
//!
//! # Example
//!
//! ```no_run
//! use todoist_mcp::{ClientConfig, TodoistServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoistServerHandler::new("api-token", &ClientConfig::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
mod handlers;
pub mod review;
pub mod todoist;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use serde_json::Value;

pub use config::{ClientConfig, FileConfig};
pub use handlers::review::BulkTaskItem;
pub use todoist::TodoistClient;

/// MCP Server handler for Todoist
///
/// Holds one API client for the lifetime of the server. The client is
/// stateless apart from its configuration, so tool calls need no locking.
pub struct TodoistServerHandler {
    pub(crate) client: TodoistClient,
}

impl TodoistServerHandler {
    /// Create a new Todoist server handler
    ///
    /// # Arguments
    /// * `token` - Todoist API token
    /// * `config` - API root and per-request timeout
    ///
    /// # Returns
    /// Result containing the handler or an error if the HTTP client cannot be built
    pub fn new(token: &str, config: &ClientConfig) -> Result<Self> {
        Ok(Self::from_client(TodoistClient::new(token, config)?))
    }

    pub fn from_client(client: TodoistClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TodoistClient {
        &self.client
    }
}

/// Todoist task management via MCP.
///
/// Tasks that accept `task_id` or `task_name` resolve names case-insensitively:
/// an exact content match wins, otherwise the first task containing the name.
/// Priorities run from 1 (normal) to 4 (urgent); other values are ignored.
#[mcp_server]
impl McpServer for TodoistServerHandler {
    /// Create a new task in Todoist.
    #[tool]
    async fn todoist_create_task(
        &self,
        /// Content of the task
        content: String,
        /// Detailed description (optional)
        description: Option<String>,
        /// Natural language due date like 'tomorrow', 'next Monday' (optional)
        due_string: Option<String>,
        /// Priority from 1 (normal) to 4 (urgent) (optional)
        priority: Option<i64>,
        /// Project to create the task in; Inbox when omitted (optional)
        project_id: Option<String>,
        /// Section within the project (optional)
        section_id: Option<String>,
        /// Parent task, making this a subtask (optional)
        parent_id: Option<String>,
        /// Label names (optional)
        labels: Option<Vec<String>>,
        /// Collaborator to assign (optional)
        assignee_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_create_task(
            content,
            description,
            due_string,
            priority,
            project_id,
            section_id,
            parent_id,
            labels,
            assignee_id,
        )
        .await
    }

    /// List active tasks, optionally by project, filter expression or priority.
    #[tool]
    async fn todoist_get_tasks(
        &self,
        /// Only tasks in this project (optional)
        project_id: Option<String>,
        /// Todoist filter expression like 'today' or 'overdue' (optional)
        filter: Option<String>,
        /// Only tasks with this priority, 1-4 (optional)
        priority: Option<i64>,
        /// Maximum number of tasks to return, default 10 (optional)
        limit: Option<i64>,
    ) -> McpResult<String> {
        self.handle_get_tasks(project_id, filter, priority, limit)
            .await
    }

    /// Show one task with all of its details.
    #[tool]
    async fn todoist_get_task(
        &self,
        /// Task ID
        task_id: String,
    ) -> McpResult<String> {
        self.handle_get_task(task_id).await
    }

    /// Update a task found by ID or by name.
    #[tool]
    async fn todoist_update_task(
        &self,
        /// Task ID; takes precedence over task_name (optional)
        task_id: Option<String>,
        /// Name or part of the name of the task (optional)
        task_name: Option<String>,
        /// New content (optional)
        content: Option<String>,
        /// New description (optional)
        description: Option<String>,
        /// New due date in natural language (optional)
        due_string: Option<String>,
        /// New priority from 1 to 4 (optional)
        priority: Option<i64>,
        /// Replacement label names (optional)
        labels: Option<Vec<String>>,
        /// Collaborator to assign (optional)
        assignee_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_task(
            task_id,
            task_name,
            content,
            description,
            due_string,
            priority,
            labels,
            assignee_id,
        )
        .await
    }

    /// Delete a task found by ID or by name.
    #[tool]
    async fn todoist_delete_task(
        &self,
        /// Task ID; takes precedence over task_name (optional)
        task_id: Option<String>,
        /// Name or part of the name of the task (optional)
        task_name: Option<String>,
    ) -> McpResult<String> {
        self.handle_delete_task(task_id, task_name).await
    }

    /// Mark a task found by ID or by name as complete.
    #[tool]
    async fn todoist_complete_task(
        &self,
        /// Task ID; takes precedence over task_name (optional)
        task_id: Option<String>,
        /// Name or part of the name of the task (optional)
        task_name: Option<String>,
    ) -> McpResult<String> {
        self.handle_complete_task(task_id, task_name).await
    }

    /// Reopen a completed task by ID or by name.
    #[tool]
    async fn todoist_reopen_task(
        &self,
        /// Task ID; takes precedence over task_name (optional)
        task_id: Option<String>,
        /// Name or part of the name of the task (optional)
        task_name: Option<String>,
    ) -> McpResult<String> {
        self.handle_reopen_task(task_id, task_name).await
    }

    /// List all projects.
    #[tool]
    async fn todoist_get_projects(&self) -> McpResult<String> {
        self.handle_get_projects().await
    }

    /// Show one project.
    #[tool]
    async fn todoist_get_project(
        &self,
        /// Project ID
        project_id: String,
    ) -> McpResult<String> {
        self.handle_get_project(project_id).await
    }

    /// Create a project.
    #[tool]
    async fn todoist_create_project(
        &self,
        /// Project name
        name: String,
        /// Parent project for nesting (optional)
        parent_id: Option<String>,
        /// Color name like 'berry_red' (optional)
        color: Option<String>,
        /// Mark as favorite (optional)
        is_favorite: Option<bool>,
        /// 'list', 'board' or 'calendar' (optional)
        view_style: Option<String>,
        /// Project description (optional)
        description: Option<String>,
    ) -> McpResult<String> {
        self.handle_create_project(name, parent_id, color, is_favorite, view_style, description)
            .await
    }

    /// Update a project.
    #[tool]
    async fn todoist_update_project(
        &self,
        /// Project ID
        project_id: String,
        /// New name (optional)
        name: Option<String>,
        /// New color (optional)
        color: Option<String>,
        /// Favorite flag (optional)
        is_favorite: Option<bool>,
        /// 'list', 'board' or 'calendar' (optional)
        view_style: Option<String>,
        /// New description (optional)
        description: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_project(project_id, name, color, is_favorite, view_style, description)
            .await
    }

    /// Delete a project and everything in it.
    #[tool]
    async fn todoist_delete_project(
        &self,
        /// Project ID
        project_id: String,
    ) -> McpResult<String> {
        self.handle_delete_project(project_id).await
    }

    /// Archive a project.
    #[tool]
    async fn todoist_archive_project(
        &self,
        /// Project ID
        project_id: String,
    ) -> McpResult<String> {
        self.handle_archive_project(project_id).await
    }

    /// Unarchive a project.
    #[tool]
    async fn todoist_unarchive_project(
        &self,
        /// Project ID
        project_id: String,
    ) -> McpResult<String> {
        self.handle_unarchive_project(project_id).await
    }

    /// List sections, optionally limited to one project.
    #[tool]
    async fn todoist_get_sections(
        &self,
        /// Project ID (optional)
        project_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_get_sections(project_id).await
    }

    /// Create a section in a project.
    #[tool]
    async fn todoist_create_section(
        &self,
        /// Section name
        name: String,
        /// Project ID
        project_id: String,
        /// Position among the project's sections (optional)
        order: Option<i64>,
    ) -> McpResult<String> {
        self.handle_create_section(name, project_id, order).await
    }

    /// Rename a section.
    #[tool]
    async fn todoist_update_section(
        &self,
        /// Section ID
        section_id: String,
        /// New name
        name: String,
    ) -> McpResult<String> {
        self.handle_update_section(section_id, name).await
    }

    /// Delete a section and its tasks.
    #[tool]
    async fn todoist_delete_section(
        &self,
        /// Section ID
        section_id: String,
    ) -> McpResult<String> {
        self.handle_delete_section(section_id).await
    }

    /// List personal labels.
    #[tool]
    async fn todoist_get_labels(&self) -> McpResult<String> {
        self.handle_get_labels().await
    }

    /// Create a personal label.
    #[tool]
    async fn todoist_create_label(
        &self,
        /// Label name
        name: String,
        /// Color name (optional)
        color: Option<String>,
        /// Position in the label list (optional)
        order: Option<i64>,
        /// Mark as favorite (optional)
        is_favorite: Option<bool>,
    ) -> McpResult<String> {
        self.handle_create_label(name, color, order, is_favorite)
            .await
    }

    /// Update a personal label.
    #[tool]
    async fn todoist_update_label(
        &self,
        /// Label ID
        label_id: String,
        /// New name (optional)
        name: Option<String>,
        /// New color (optional)
        color: Option<String>,
        /// New position (optional)
        order: Option<i64>,
        /// Favorite flag (optional)
        is_favorite: Option<bool>,
    ) -> McpResult<String> {
        self.handle_update_label(label_id, name, color, order, is_favorite)
            .await
    }

    /// Delete a personal label.
    #[tool]
    async fn todoist_delete_label(
        &self,
        /// Label ID
        label_id: String,
    ) -> McpResult<String> {
        self.handle_delete_label(label_id).await
    }

    /// List comments on a task or a project. task_id wins when both are given.
    #[tool]
    async fn todoist_get_comments(
        &self,
        /// Task ID (optional)
        task_id: Option<String>,
        /// Project ID (optional)
        project_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_get_comments(task_id, project_id).await
    }

    /// Add a comment to a task or a project.
    #[tool]
    async fn todoist_create_comment(
        &self,
        /// Comment text (markdown allowed)
        content: String,
        /// Task ID (optional)
        task_id: Option<String>,
        /// Project ID (optional)
        project_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_create_comment(content, task_id, project_id)
            .await
    }

    /// Edit a comment.
    #[tool]
    async fn todoist_update_comment(
        &self,
        /// Comment ID
        comment_id: String,
        /// New text
        content: String,
    ) -> McpResult<String> {
        self.handle_update_comment(comment_id, content).await
    }

    /// Delete a comment.
    #[tool]
    async fn todoist_delete_comment(
        &self,
        /// Comment ID
        comment_id: String,
    ) -> McpResult<String> {
        self.handle_delete_comment(comment_id).await
    }

    /// **Inbox review**: Inbox tasks grouped into added today, this week and older.
    /// **When**: Daily, to process what was captured.
    #[tool]
    async fn todoist_inbox_review(&self) -> McpResult<String> {
        self.handle_inbox_review().await
    }

    /// **Weekly review**: Active tasks per project, overdue tasks and tasks with no due date.
    #[tool]
    async fn todoist_weekly_review(&self) -> McpResult<String> {
        self.handle_weekly_review().await
    }

    /// Move a task, found by ID or by name, to another project and/or section.
    #[tool]
    async fn todoist_move_task(
        &self,
        /// Task ID; takes precedence over task_name (optional)
        task_id: Option<String>,
        /// Name or part of the name of the task (optional)
        task_name: Option<String>,
        /// Destination project (optional)
        project_id: Option<String>,
        /// Destination section (optional)
        section_id: Option<String>,
    ) -> McpResult<String> {
        self.handle_move_task(task_id, task_name, project_id, section_id)
            .await
    }

    /// Create several tasks at once. Each is created independently; failures are
    /// listed alongside successes and nothing is rolled back.
    #[tool]
    async fn todoist_bulk_create_tasks(
        &self,
        /// Array of task objects: content (required), description, due_string,
        /// priority, project_id, section_id, parent_id, labels
        tasks: Vec<Value>,
    ) -> McpResult<String> {
        self.handle_bulk_create_tasks(tasks).await
    }
}
