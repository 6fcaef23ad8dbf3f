//! Turning a task id or a free-text task name into the id to operate on

use crate::todoist::client::TodoistClient;
use crate::todoist::error::{Error, Result};
use crate::todoist::models::Task;
use crate::todoist::tasks::TaskQuery;
use crate::todoist::transport::Transport;
use tracing::debug;

/// Outcome of a task lookup. `NotFound` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The caller supplied the id; nothing was fetched.
    Explicit(String),
    /// A task whose content matched the requested name.
    Matched { id: String, content: String },
    NotFound,
}

impl Resolution {
    pub fn id(&self) -> Option<&str> {
        match self {
            Resolution::Explicit(id) | Resolution::Matched { id, .. } => Some(id),
            Resolution::NotFound => None,
        }
    }

    /// What to call the task in messages: its content when known, else its id.
    pub fn label(&self) -> Option<&str> {
        match self {
            Resolution::Explicit(id) => Some(id),
            Resolution::Matched { content, .. } => Some(content),
            Resolution::NotFound => None,
        }
    }
}

/// Case-insensitive lookup by content: the first exact match in list order,
/// otherwise the first task whose content contains `name`.
pub fn find_task_by_name<'a>(tasks: &'a [Task], name: &str) -> Option<&'a Task> {
    let needle = name.to_lowercase();
    tasks
        .iter()
        .find(|t| t.content.to_lowercase() == needle)
        .or_else(|| {
            tasks
                .iter()
                .find(|t| t.content.to_lowercase().contains(&needle))
        })
}

impl<T: Transport> TodoistClient<T> {
    /// Resolve a task reference.
    ///
    /// A non-empty `task_id` always wins and costs no request. Otherwise all
    /// active tasks are listed and searched with [`find_task_by_name`].
    pub async fn resolve_task(
        &self,
        task_id: Option<&str>,
        task_name: Option<&str>,
    ) -> Result<Resolution> {
        if let Some(id) = task_id.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(Resolution::Explicit(id.to_string()));
        }

        let name = task_name
            .filter(|n| !n.trim().is_empty())
            .ok_or(Error::MissingTaskReference)?;

        let tasks = self.get_tasks(&TaskQuery::all()).await?;
        let resolution = match find_task_by_name(&tasks, name) {
            Some(task) => Resolution::Matched {
                id: task.id.clone(),
                content: task.content.clone(),
            },
            None => Resolution::NotFound,
        };
        debug!(name, searched = tasks.len(), ?resolution, "resolved task name");
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, content: &str) -> Task {
        Task {
            id: id.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_match_beats_earlier_partial() {
        let tasks = vec![
            task("2", "Buy groceries and milk"),
            task("1", "Buy groceries"),
        ];
        assert_eq!(find_task_by_name(&tasks, "buy GROCERIES").unwrap().id, "1");
    }

    #[test]
    fn test_partial_match_first_in_order() {
        let tasks = vec![
            task("1", "Daily standup"),
            task("3", "Weekly team meeting"),
            task("4", "Monthly team meeting"),
        ];
        assert_eq!(find_task_by_name(&tasks, "team meeting").unwrap().id, "3");
    }

    #[test]
    fn test_first_exact_wins_among_duplicates() {
        let tasks = vec![task("a", "Call mom"), task("b", "call mom")];
        assert_eq!(find_task_by_name(&tasks, "CALL MOM").unwrap().id, "a");
    }

    #[test]
    fn test_no_match() {
        let tasks = vec![task("1", "Some task")];
        assert!(find_task_by_name(&tasks, "nonexistent").is_none());
        assert!(find_task_by_name(&[], "anything").is_none());
    }

    #[test]
    fn test_resolution_label() {
        assert_eq!(Resolution::Explicit("42".into()).label(), Some("42"));
        let matched = Resolution::Matched {
            id: "7".into(),
            content: "Water plants".into(),
        };
        assert_eq!(matched.id(), Some("7"));
        assert_eq!(matched.label(), Some("Water plants"));
        assert_eq!(Resolution::NotFound.id(), None);
    }
}
