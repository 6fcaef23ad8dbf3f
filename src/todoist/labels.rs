//! Personal label operations

use crate::todoist::client::{TodoistClient, item_path};
use crate::todoist::error::Result;
use crate::todoist::models::Label;
use crate::todoist::page::Endpoint;
use crate::todoist::payloads::{LabelUpdate, NewLabel};
use crate::todoist::transport::Transport;
use tracing::instrument;

impl<T: Transport> TodoistClient<T> {
    #[instrument(skip(self), err)]
    pub async fn get_labels(&self) -> Result<Vec<Label>> {
        self.get_all(&Endpoint::new("/labels"), "labels").await
    }

    #[instrument(skip(self), err)]
    pub async fn get_label(&self, id: &str) -> Result<Label> {
        self.get_record(&item_path("labels", id), "label").await
    }

    #[instrument(skip(self, label), err)]
    pub async fn create_label(&self, label: &NewLabel) -> Result<Label> {
        self.post_record("/labels", label, "label").await
    }

    #[instrument(skip(self, update), err)]
    pub async fn update_label(&self, id: &str, update: &LabelUpdate) -> Result<Label> {
        self.post_record(&item_path("labels", id), update, "label")
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete_label(&self, id: &str) -> Result<()> {
        self.delete_record(&item_path("labels", id)).await
    }
}
