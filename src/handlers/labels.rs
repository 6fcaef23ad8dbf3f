//! Label handlers for Todoist MCP server

use crate::TodoistServerHandler;
use crate::formatting;
use crate::todoist::{LabelUpdate, NewLabel};
use crate::validation::{self, api_error, non_empty};
use mcp_attr::Result as McpResult;

impl TodoistServerHandler {
    pub async fn handle_get_labels(&self) -> McpResult<String> {
        let labels = self.client.get_labels().await.map_err(api_error)?;
        Ok(formatting::format_labels(&labels))
    }

    pub async fn handle_create_label(
        &self,
        name: String,
        color: Option<String>,
        order: Option<i64>,
        is_favorite: Option<bool>,
    ) -> McpResult<String> {
        validation::require("name", &name)?;

        let label = NewLabel {
            name,
            color: non_empty(color),
            order,
            is_favorite,
        };
        let created = self.client.create_label(&label).await.map_err(api_error)?;
        Ok(format!(
            "Label created:\nName: {}\nID: {}",
            created.name, created.id
        ))
    }

    pub async fn handle_update_label(
        &self,
        label_id: String,
        name: Option<String>,
        color: Option<String>,
        order: Option<i64>,
        is_favorite: Option<bool>,
    ) -> McpResult<String> {
        validation::require("label_id", &label_id)?;

        let update = LabelUpdate {
            name: non_empty(name),
            color: non_empty(color),
            order,
            is_favorite,
        };
        let updated = self
            .client
            .update_label(&label_id, &update)
            .await
            .map_err(api_error)?;
        Ok(format!(
            "Label updated:\nName: {}\nID: {}",
            updated.name, updated.id
        ))
    }

    pub async fn handle_delete_label(&self, label_id: String) -> McpResult<String> {
        validation::require("label_id", &label_id)?;
        self.client
            .delete_label(&label_id)
            .await
            .map_err(api_error)?;
        Ok(format!("Successfully deleted label: {}", label_id))
    }
}
