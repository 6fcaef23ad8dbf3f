//! Section operations

use crate::todoist::client::{TodoistClient, item_path};
use crate::todoist::error::Result;
use crate::todoist::models::Section;
use crate::todoist::page::Endpoint;
use crate::todoist::payloads::{NewSection, SectionUpdate};
use crate::todoist::transport::Transport;
use tracing::instrument;

impl<T: Transport> TodoistClient<T> {
    /// List sections, optionally only those of one project.
    #[instrument(skip(self), err)]
    pub async fn get_sections(&self, project_id: Option<&str>) -> Result<Vec<Section>> {
        let endpoint = Endpoint::new("/sections").param("project_id", project_id);
        self.get_all(&endpoint, "sections").await
    }

    #[instrument(skip(self), err)]
    pub async fn get_section(&self, id: &str) -> Result<Section> {
        self.get_record(&item_path("sections", id), "section").await
    }

    #[instrument(skip(self, section), err)]
    pub async fn create_section(&self, section: &NewSection) -> Result<Section> {
        self.post_record("/sections", section, "section").await
    }

    #[instrument(skip(self, update), err)]
    pub async fn update_section(&self, id: &str, update: &SectionUpdate) -> Result<Section> {
        self.post_record(&item_path("sections", id), update, "section")
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete_section(&self, id: &str) -> Result<()> {
        self.delete_record(&item_path("sections", id)).await
    }
}
