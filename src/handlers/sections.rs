//! Section handlers for Todoist MCP server

use crate::TodoistServerHandler;
use crate::formatting;
use crate::todoist::{NewSection, SectionUpdate};
use crate::validation::{self, api_error, non_empty};
use mcp_attr::Result as McpResult;

impl TodoistServerHandler {
    pub async fn handle_get_sections(&self, project_id: Option<String>) -> McpResult<String> {
        let project_id = non_empty(project_id);
        let sections = self
            .client
            .get_sections(project_id.as_deref())
            .await
            .map_err(api_error)?;
        Ok(formatting::format_sections(&sections))
    }

    pub async fn handle_create_section(
        &self,
        name: String,
        project_id: String,
        order: Option<i64>,
    ) -> McpResult<String> {
        validation::require("name", &name)?;
        validation::require("project_id", &project_id)?;

        let section = NewSection {
            name,
            project_id,
            order,
        };
        let created = self
            .client
            .create_section(&section)
            .await
            .map_err(api_error)?;
        Ok(format!(
            "Section created:\nName: {}\nID: {}\nProject: {}",
            created.name, created.id, created.project_id
        ))
    }

    pub async fn handle_update_section(
        &self,
        section_id: String,
        name: String,
    ) -> McpResult<String> {
        validation::require("section_id", &section_id)?;
        validation::require("name", &name)?;

        let update = SectionUpdate { name: Some(name) };
        let updated = self
            .client
            .update_section(&section_id, &update)
            .await
            .map_err(api_error)?;
        Ok(format!(
            "Section updated:\nName: {}\nID: {}",
            updated.name, updated.id
        ))
    }

    pub async fn handle_delete_section(&self, section_id: String) -> McpResult<String> {
        validation::require("section_id", &section_id)?;
        self.client
            .delete_section(&section_id)
            .await
            .map_err(api_error)?;
        Ok(format!("Successfully deleted section: {}", section_id))
    }
}
