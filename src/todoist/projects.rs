//! Project operations

use crate::todoist::client::{TodoistClient, item_path};
use crate::todoist::error::Result;
use crate::todoist::models::Project;
use crate::todoist::page::Endpoint;
use crate::todoist::payloads::{NewProject, ProjectUpdate};
use crate::todoist::transport::Transport;
use tracing::instrument;

impl<T: Transport> TodoistClient<T> {
    #[instrument(skip(self), err)]
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.get_all(&Endpoint::new("/projects"), "projects").await
    }

    #[instrument(skip(self), err)]
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        self.get_record(&item_path("projects", id), "project").await
    }

    #[instrument(skip(self, project), err)]
    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        self.post_record("/projects", project, "project").await
    }

    #[instrument(skip(self, update), err)]
    pub async fn update_project(&self, id: &str, update: &ProjectUpdate) -> Result<Project> {
        self.post_record(&item_path("projects", id), update, "project")
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.delete_record(&item_path("projects", id)).await
    }

    #[instrument(skip(self), err)]
    pub async fn archive_project(&self, id: &str) -> Result<()> {
        self.post_action(&format!("{}/archive", item_path("projects", id)))
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn unarchive_project(&self, id: &str) -> Result<()> {
        self.post_action(&format!("{}/unarchive", item_path("projects", id)))
            .await
    }

    /// The first project flagged as the inbox, if any.
    pub async fn find_inbox_project(&self) -> Result<Option<Project>> {
        Ok(self
            .get_projects()
            .await?
            .into_iter()
            .find(|p| p.inbox_project))
    }
}
