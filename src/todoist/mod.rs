//! Todoist REST API gateway
//!
//! Leaf-first:
//! - `transport`: one authenticated HTTP exchange, response classification
//! - `page`: list decoding (bare array or cursor envelope), query strings
//! - `client`: [`TodoistClient`] and its request helpers, cursor draining
//! - `tasks`, `projects`, `sections`, `labels`, `comments`: resource operations
//! - `resolve`: task lookup by id or by name

mod client;
mod comments;
mod error;
mod labels;
mod models;
mod page;
mod payloads;
mod projects;
mod resolve;
mod sections;
mod tasks;
mod transport;

pub use client::TodoistClient;
pub use error::{Error, Result};
pub use models::{Comment, Due, Label, Priority, Project, Section, Task, TaskDuration};
pub use page::{Page, decode_page};
pub use payloads::{
    CommentTarget, CommentUpdate, LabelUpdate, NewComment, NewLabel, NewProject, NewSection,
    NewTask, ProjectUpdate, SectionUpdate, TaskUpdate,
};
pub use reqwest::Method;
pub use resolve::{Resolution, find_task_by_name};
pub use tasks::TaskQuery;
pub use transport::{HttpTransport, Transport};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/api/v1";
