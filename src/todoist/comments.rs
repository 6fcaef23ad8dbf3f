//! Comment operations

use crate::todoist::client::{TodoistClient, item_path};
use crate::todoist::error::Result;
use crate::todoist::models::Comment;
use crate::todoist::page::Endpoint;
use crate::todoist::payloads::{CommentTarget, CommentUpdate, NewComment};
use crate::todoist::transport::Transport;
use tracing::instrument;

impl<T: Transport> TodoistClient<T> {
    /// List the comments of a task or a project.
    #[instrument(skip(self), err)]
    pub async fn get_comments(&self, target: &CommentTarget) -> Result<Vec<Comment>> {
        let (key, id) = target.query();
        let endpoint = Endpoint::new("/comments").param(key, Some(id));
        self.get_all(&endpoint, "comments").await
    }

    #[instrument(skip(self), err)]
    pub async fn get_comment(&self, id: &str) -> Result<Comment> {
        self.get_record(&item_path("comments", id), "comment").await
    }

    #[instrument(skip(self, comment), err)]
    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment> {
        self.post_record("/comments", comment, "comment").await
    }

    #[instrument(skip(self, update), err)]
    pub async fn update_comment(&self, id: &str, update: &CommentUpdate) -> Result<Comment> {
        self.post_record(&item_path("comments", id), update, "comment")
            .await
    }

    #[instrument(skip(self), err)]
    pub async fn delete_comment(&self, id: &str) -> Result<()> {
        self.delete_record(&item_path("comments", id)).await
    }
}
