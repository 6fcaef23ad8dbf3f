//! Comment handlers for Todoist MCP server

use crate::TodoistServerHandler;
use crate::formatting;
use crate::todoist::{CommentTarget, CommentUpdate, NewComment};
use crate::validation::{self, api_error, invalid_params};
use mcp_attr::Result as McpResult;

/// `task_id` wins over `project_id`; blank ids count as absent.
fn comment_target(
    task_id: Option<String>,
    project_id: Option<String>,
) -> McpResult<CommentTarget> {
    CommentTarget::from_ids(task_id, project_id)
        .ok_or_else(|| invalid_params("Either task_id or project_id is required".to_string()))
}

impl TodoistServerHandler {
    pub async fn handle_get_comments(
        &self,
        task_id: Option<String>,
        project_id: Option<String>,
    ) -> McpResult<String> {
        let target = comment_target(task_id, project_id)?;
        let comments = self
            .client
            .get_comments(&target)
            .await
            .map_err(api_error)?;
        Ok(formatting::format_comments(&comments))
    }

    pub async fn handle_create_comment(
        &self,
        content: String,
        task_id: Option<String>,
        project_id: Option<String>,
    ) -> McpResult<String> {
        validation::require("content", &content)?;
        let target = comment_target(task_id, project_id)?;

        let created = self
            .client
            .create_comment(&NewComment::new(target, content))
            .await
            .map_err(api_error)?;
        Ok(format!(
            "Comment added:\nContent: {}\nID: {}",
            created.content, created.id
        ))
    }

    pub async fn handle_update_comment(
        &self,
        comment_id: String,
        content: String,
    ) -> McpResult<String> {
        validation::require("comment_id", &comment_id)?;
        validation::require("content", &content)?;

        let updated = self
            .client
            .update_comment(&comment_id, &CommentUpdate { content })
            .await
            .map_err(api_error)?;
        Ok(format!(
            "Comment updated:\nContent: {}\nID: {}",
            updated.content, updated.id
        ))
    }

    pub async fn handle_delete_comment(&self, comment_id: String) -> McpResult<String> {
        validation::require("comment_id", &comment_id)?;
        self.client
            .delete_comment(&comment_id)
            .await
            .map_err(api_error)?;
        Ok(format!("Successfully deleted comment: {}", comment_id))
    }
}
