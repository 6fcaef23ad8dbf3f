//! Records decoded from Todoist API v1 responses
//!
//! Every record tolerates missing fields (`#[serde(default)]`) but rejects
//! fields of the wrong type, so a structurally incompatible response fails
//! the whole call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority, 1 (normal) to 4 (urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const NORMAL: Priority = Priority(1);
    pub const URGENT: Priority = Priority(4);

    /// Returns `None` outside 1..=4.
    pub fn new(value: u8) -> Option<Self> {
        (1..=4).contains(&value).then_some(Priority(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Anything above the default priority.
    pub fn is_elevated(self) -> bool {
        self.0 > Self::NORMAL.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Priority::new(value).ok_or_else(|| format!("priority {} is outside 1-4", value))
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Due date of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Due {
    /// Calendar date (`YYYY-MM-DD`); may be empty.
    pub date: String,
    /// Human-readable form, e.g. "every monday".
    pub string: String,
    pub datetime: Option<String>,
    #[serde(alias = "recurring")]
    pub is_recurring: bool,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDuration {
    pub amount: u32,
    /// `minute` or `day`
    pub unit: String,
}

/// An active or completed task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub description: String,
    pub project_id: String,
    pub section_id: Option<String>,
    pub parent_id: Option<String>,
    /// Label names in server order; duplicates are kept.
    pub labels: Vec<String>,
    pub priority: Priority,
    pub child_order: i64,
    /// `None` means no due date, which differs from a due with an empty date.
    pub due: Option<Due>,
    /// Completion flag.
    pub checked: bool,
    /// Creation timestamp.
    pub added_at: Option<DateTime<Utc>>,
    pub duration: Option<TaskDuration>,
    pub url: Option<String>,
    pub note_count: u32,
    pub responsible_uid: Option<String>,
}

impl Task {
    /// Human-readable due string, if the task has one.
    pub fn due_string(&self) -> Option<&str> {
        self.due
            .as_ref()
            .map(|d| d.string.as_str())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    /// `None` for top-level projects.
    pub parent_id: Option<String>,
    pub child_order: i64,
    pub is_shared: bool,
    pub is_favorite: bool,
    #[serde(alias = "is_inbox_project")]
    pub inbox_project: bool,
    pub is_team_inbox: bool,
    pub view_style: Option<String>,
    pub url: Option<String>,
    pub is_archived: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(alias = "order")]
    pub section_order: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub order: i64,
    pub is_favorite: bool,
}

/// A comment on either a task or a project, never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: String,
    #[serde(alias = "item_id")]
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub content: String,
    pub posted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_bounds() {
        assert_eq!(Priority::new(0), None);
        assert_eq!(Priority::new(5), None);
        assert_eq!(Priority::new(4), Some(Priority::URGENT));
        assert!(!Priority::NORMAL.is_elevated());
        assert!(Priority::new(2).unwrap().is_elevated());
        assert_eq!(Priority::new(3).unwrap().to_string(), "P3");
    }

    #[test]
    fn test_task_decodes_v1_fields() {
        let json = r#"{
            "id": "6X7rM8997g3RQmvh",
            "content": "Buy milk",
            "description": "",
            "project_id": "6Jf8VQXxpwv56VQ7",
            "section_id": null,
            "parent_id": null,
            "labels": ["errand", "errand"],
            "priority": 4,
            "child_order": 3,
            "due": {"date": "2025-03-01", "string": "tomorrow", "is_recurring": false},
            "checked": false,
            "added_at": "2025-02-27T10:15:00.123456Z",
            "duration": {"amount": 15, "unit": "minute"},
            "note_count": 2
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::URGENT);
        assert_eq!(task.labels, vec!["errand", "errand"]);
        assert_eq!(task.due_string(), Some("tomorrow"));
        assert_eq!(task.duration.unwrap().amount, 15);
        assert!(task.added_at.is_some());
        assert_eq!(task.section_id, None);
    }

    #[test]
    fn test_missing_due_differs_from_empty_date() {
        let none: Task = serde_json::from_str(r#"{"id":"1","content":"a"}"#).unwrap();
        assert!(none.due.is_none());
        assert_eq!(none.priority, Priority::NORMAL);

        let empty: Task =
            serde_json::from_str(r#"{"id":"2","content":"b","due":{"date":""}}"#).unwrap();
        assert_eq!(empty.due.as_ref().map(|d| d.date.as_str()), Some(""));
        assert_eq!(empty.due_string(), None);
    }

    #[test]
    fn test_out_of_range_priority_is_a_decode_error() {
        assert!(serde_json::from_str::<Task>(r#"{"id":"1","priority":7}"#).is_err());
        assert!(serde_json::from_str::<Task>(r#"{"id":"1","priority":"high"}"#).is_err());
    }

    #[test]
    fn test_recurring_alias() {
        let due: Due = serde_json::from_str(r#"{"date":"2025-01-01","recurring":true}"#).unwrap();
        assert!(due.is_recurring);
    }

    #[test]
    fn test_comment_accepts_item_id() {
        let c: Comment = serde_json::from_str(
            r#"{"id":"9","item_id":"42","content":"hi","posted_at":"2025-01-01T08:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(c.task_id.as_deref(), Some("42"));
        assert_eq!(c.project_id, None);
    }
}
