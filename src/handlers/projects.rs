//! Project handlers for Todoist MCP server

use crate::TodoistServerHandler;
use crate::formatting;
use crate::todoist::{NewProject, ProjectUpdate};
use crate::validation::{self, api_error, non_empty};
use mcp_attr::Result as McpResult;

impl TodoistServerHandler {
    pub async fn handle_get_projects(&self) -> McpResult<String> {
        let projects = self.client.get_projects().await.map_err(api_error)?;
        Ok(formatting::format_projects(&projects))
    }

    pub async fn handle_get_project(&self, project_id: String) -> McpResult<String> {
        validation::require("project_id", &project_id)?;
        let project = self
            .client
            .get_project(&project_id)
            .await
            .map_err(api_error)?;
        Ok(formatting::format_project(&project))
    }

    pub async fn handle_create_project(
        &self,
        name: String,
        parent_id: Option<String>,
        color: Option<String>,
        is_favorite: Option<bool>,
        view_style: Option<String>,
        description: Option<String>,
    ) -> McpResult<String> {
        validation::require("name", &name)?;

        let project = NewProject {
            name,
            parent_id: non_empty(parent_id),
            color: non_empty(color),
            is_favorite,
            view_style: non_empty(view_style),
            description: non_empty(description),
        };
        let created = self
            .client
            .create_project(&project)
            .await
            .map_err(api_error)?;
        Ok(format!(
            "Project created:\nName: {}\nID: {}",
            created.name, created.id
        ))
    }

    pub async fn handle_update_project(
        &self,
        project_id: String,
        name: Option<String>,
        color: Option<String>,
        is_favorite: Option<bool>,
        view_style: Option<String>,
        description: Option<String>,
    ) -> McpResult<String> {
        validation::require("project_id", &project_id)?;

        let update = ProjectUpdate {
            name: non_empty(name),
            color: non_empty(color),
            is_favorite,
            view_style: non_empty(view_style),
            description: non_empty(description),
        };
        let updated = self
            .client
            .update_project(&project_id, &update)
            .await
            .map_err(api_error)?;
        Ok(format!("Project updated:\n{}", formatting::format_project(&updated)))
    }

    /// Deletes the project together with its sections and tasks.
    pub async fn handle_delete_project(&self, project_id: String) -> McpResult<String> {
        validation::require("project_id", &project_id)?;
        self.client
            .delete_project(&project_id)
            .await
            .map_err(api_error)?;
        Ok(format!("Successfully deleted project: {}", project_id))
    }

    /// Archived projects keep their tasks but leave the active project list.
    pub async fn handle_archive_project(&self, project_id: String) -> McpResult<String> {
        validation::require("project_id", &project_id)?;
        self.client
            .archive_project(&project_id)
            .await
            .map_err(api_error)?;
        Ok(format!("Successfully archived project: {}", project_id))
    }

    pub async fn handle_unarchive_project(&self, project_id: String) -> McpResult<String> {
        validation::require("project_id", &project_id)?;
        self.client
            .unarchive_project(&project_id)
            .await
            .map_err(api_error)?;
        Ok(format!("Successfully unarchived project: {}", project_id))
    }
}
