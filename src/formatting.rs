//! Formatting helper functions for Todoist MCP server
//!
//! This module turns records and review reports into the text returned by
//! the MCP tools, plus the client-side filters applied before display.

use crate::review::{BulkCreateReport, BulkOutcome, InboxReview, WeeklyReview};
use crate::todoist::{Comment, Label, Priority, Project, Section, Task};
use std::fmt::Write;

/// Number of tasks shown by `todoist_get_tasks` unless asked otherwise.
pub const DEFAULT_TASK_LIMIT: usize = 10;

/// Keep only tasks with exactly this priority.
pub fn apply_priority_filter(tasks: &mut Vec<Task>, priority: Priority) {
    tasks.retain(|t| t.priority == priority);
}

/// Truncate to `limit` tasks; `None` or zero means the default limit.
pub fn apply_limit(tasks: &mut Vec<Task>, limit: Option<usize>) {
    let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_TASK_LIMIT);
    tasks.truncate(limit);
}

fn task_details(out: &mut String, task: &Task, prefix: &str, indent: &str) {
    if !task.description.is_empty() {
        let _ = write!(out, "\n{indent}{prefix}Description: {}", task.description);
    }
    if let Some(due) = task.due_string() {
        let _ = write!(out, "\n{indent}{prefix}Due: {}", due);
    }
    let _ = write!(out, "\n{indent}{prefix}Priority: {}", task.priority.get());
}

pub fn format_task_created(task: &Task) -> String {
    let mut out = format!("Task created:\nTitle: {}\nID: {}", task.content, task.id);
    task_details(&mut out, task, "", "");
    out
}

pub fn format_task_updated(label: &str, task: &Task) -> String {
    let mut out = format!("Task \"{}\" updated:\nNew Title: {}", label, task.content);
    task_details(&mut out, task, "New ", "");
    out
}

/// Full view of a single task.
pub fn format_task(task: &Task) -> String {
    let mut out = format!("Task: {}\nID: {}\nProject: {}", task.content, task.id, task.project_id);
    if let Some(ref section) = task.section_id {
        let _ = write!(out, "\nSection: {}", section);
    }
    if let Some(ref parent) = task.parent_id {
        let _ = write!(out, "\nParent: {}", parent);
    }
    task_details(&mut out, task, "", "");
    if !task.labels.is_empty() {
        let _ = write!(out, "\nLabels: {}", task.labels.join(", "));
    }
    if let Some(ref d) = task.duration {
        let _ = write!(out, "\nDuration: {} {}", d.amount, d.unit);
    }
    let _ = write!(out, "\nCompleted: {}", task.checked);
    if let Some(ref url) = task.url {
        let _ = write!(out, "\nURL: {}", url);
    }
    out
}

pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found matching the criteria".to_string();
    }

    tasks
        .iter()
        .map(|t| {
            let mut entry = format!("- {} (ID: {})", t.content, t.id);
            task_details(&mut entry, t, "", "  ");
            entry
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found".to_string();
    }

    projects
        .iter()
        .map(|p| {
            let mut line = format!("- {} (ID: {})", p.name, p.id);
            if p.inbox_project {
                line.push_str(" [Inbox]");
            }
            if p.is_favorite {
                line.push_str(" [Favorite]");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_project(p: &Project) -> String {
    let mut out = format!(
        "Project: {}\nID: {}\nColor: {}\nFavorite: {}\nShared: {}\nInbox: {}",
        p.name,
        p.id,
        p.color.as_deref().unwrap_or("-"),
        p.is_favorite,
        p.is_shared,
        p.inbox_project
    );
    if let Some(ref parent) = p.parent_id {
        let _ = write!(out, "\nParent: {}", parent);
    }
    if let Some(ref url) = p.url {
        let _ = write!(out, "\nURL: {}", url);
    }
    out
}

pub fn format_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "No sections found".to_string();
    }
    sections
        .iter()
        .map(|s| format!("- {} (ID: {}, Project: {})", s.name, s.id, s.project_id))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_labels(labels: &[Label]) -> String {
    if labels.is_empty() {
        return "No labels found".to_string();
    }
    labels
        .iter()
        .map(|l| {
            let mut line = format!("- {} (ID: {})", l.name, l.id);
            if l.is_favorite {
                line.push_str(" [Favorite]");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "No comments found".to_string();
    }
    comments
        .iter()
        .map(|c| {
            let posted = c
                .posted_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            format!("- [{}] {} (ID: {})", posted, c.content, c.id)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn inbox_group(out: &mut String, title: &str, group: &[Task]) {
    let _ = writeln!(out, "### {} ({})", title, group.len());
    if group.is_empty() {
        out.push_str("(none)\n");
    }
    for t in group {
        let _ = write!(out, "- {} (ID: {})", t.content, t.id);
        if t.priority.is_elevated() {
            let _ = write!(out, " [{}]", t.priority);
        }
        out.push('\n');
    }
    out.push('\n');
}

pub fn format_inbox_review(review: &InboxReview) -> String {
    if review.is_empty() {
        return "Inbox is empty! Nothing to process.".to_string();
    }

    let mut out = format!("## Inbox Review ({} tasks)\n\n", review.total());
    inbox_group(&mut out, "Added Today", &review.today);
    inbox_group(&mut out, "Added This Week", &review.this_week);
    inbox_group(&mut out, "Older", &review.older);
    out
}

pub fn format_weekly_review(review: &WeeklyReview) -> String {
    let mut out = String::from("## Weekly Review\n\n### Projects\n");
    for load in &review.projects {
        let tag = if load.project.inbox_project {
            " [Inbox]"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "- {}{}: {} active tasks",
            load.project.name, tag, load.active_tasks
        );
    }
    out.push('\n');

    let _ = writeln!(out, "### Overdue Tasks ({})", review.overdue.len());
    for t in &review.overdue {
        let due = t.due.as_ref().map(|d| d.date.as_str()).unwrap_or("");
        let _ = writeln!(out, "- {} (due: {}, ID: {})", t.content, due, t.id);
    }
    out.push('\n');

    let _ = writeln!(out, "### No Due Date ({})", review.no_due.len());
    for t in &review.no_due {
        let _ = writeln!(out, "- {} (ID: {})", t.content, t.id);
    }
    out
}

pub fn format_bulk_report(report: &BulkCreateReport) -> String {
    let lines: Vec<String> = report
        .outcomes
        .iter()
        .map(|o| match o {
            BulkOutcome::Created { content, id } => format!("OK: {} (ID: {})", content, id),
            BulkOutcome::Failed { content, error } => format!("FAILED: {} - {}", content, error),
        })
        .collect();

    let mut out = format!(
        "Bulk create: {} created, {} failed",
        report.created(),
        report.failed()
    );
    if !lines.is_empty() {
        let _ = write!(out, "\n\n{}", lines.join("\n"));
    }
    out
}

pub fn format_not_found(name: &str) -> String {
    format!("Could not find a task matching \"{}\"", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ProjectLoad;
    use crate::todoist::Due;

    fn task(id: &str, content: &str, priority: u8) -> Task {
        Task {
            id: id.to_string(),
            content: content.to_string(),
            priority: Priority::new(priority).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_bulk_report() {
        let report = BulkCreateReport::default();
        assert_eq!(format_bulk_report(&report), "Bulk create: 0 created, 0 failed");
    }

    #[test]
    fn test_priority_filter_and_limit() {
        let mut tasks: Vec<Task> = (0..15)
            .map(|i| task(&i.to_string(), "t", 1 + (i % 2) as u8))
            .collect();
        apply_priority_filter(&mut tasks, Priority::new(2).unwrap());
        assert_eq!(tasks.len(), 7);
        apply_limit(&mut tasks, Some(3));
        assert_eq!(tasks.len(), 3);

        let mut many: Vec<Task> = (0..15).map(|i| task(&i.to_string(), "t", 1)).collect();
        apply_limit(&mut many, None);
        assert_eq!(many.len(), DEFAULT_TASK_LIMIT);
    }

    #[test]
    fn test_task_list_rendering() {
        assert_eq!(format_task_list(&[]), "No tasks found matching the criteria");

        let mut t = task("1", "Pay rent", 3);
        t.description = "before the 5th".to_string();
        t.due = Some(Due {
            date: "2025-04-01".into(),
            string: "Apr 1".into(),
            ..Default::default()
        });
        assert_eq!(
            format_task_list(&[t]),
            "- Pay rent (ID: 1)\n  Description: before the 5th\n  Due: Apr 1\n  Priority: 3"
        );
    }

    #[test]
    fn test_inbox_review_rendering() {
        let review = InboxReview {
            today: vec![task("1", "Call Bob", 4)],
            this_week: vec![],
            older: vec![task("2", "Old idea", 1)],
        };
        let text = format_inbox_review(&review);
        assert!(text.starts_with("## Inbox Review (2 tasks)"));
        assert!(text.contains("### Added Today (1)\n- Call Bob (ID: 1) [P4]\n"));
        assert!(text.contains("### Added This Week (0)\n(none)\n"));
        assert!(text.contains("### Older (1)\n- Old idea (ID: 2)\n"));
        assert_eq!(
            format_inbox_review(&InboxReview::default()),
            "Inbox is empty! Nothing to process."
        );
    }

    #[test]
    fn test_weekly_review_rendering() {
        let mut overdue = task("9", "File taxes", 1);
        overdue.due = Some(Due {
            date: "2025-01-31".into(),
            ..Default::default()
        });
        let review = WeeklyReview {
            projects: vec![ProjectLoad {
                project: Project {
                    id: "p".into(),
                    name: "Inbox".into(),
                    inbox_project: true,
                    ..Default::default()
                },
                active_tasks: 3,
            }],
            overdue: vec![overdue],
            no_due: vec![task("5", "Someday", 1)],
        };
        let text = format_weekly_review(&review);
        assert!(text.contains("- Inbox [Inbox]: 3 active tasks"));
        assert!(text.contains("### Overdue Tasks (1)\n- File taxes (due: 2025-01-31, ID: 9)"));
        assert!(text.contains("### No Due Date (1)\n- Someday (ID: 5)"));
    }

    #[test]
    fn test_bulk_report_rendering() {
        let report = BulkCreateReport {
            outcomes: vec![
                BulkOutcome::Created {
                    content: "A".into(),
                    id: "1".into(),
                },
                BulkOutcome::Failed {
                    content: "B".into(),
                    error: "API request failed with status 400: bad".into(),
                },
            ],
        };
        assert_eq!(
            format_bulk_report(&report),
            concat!(
                "Bulk create: 1 created, 1 failed\n\n",
                "OK: A (ID: 1)\n",
                "FAILED: B - API request failed with status 400: bad"
            )
        );
    }

    #[test]
    fn test_project_listing_tags() {
        let projects = vec![
            Project {
                id: "1".into(),
                name: "Inbox".into(),
                inbox_project: true,
                ..Default::default()
            },
            Project {
                id: "2".into(),
                name: "Home".into(),
                is_favorite: true,
                ..Default::default()
            },
        ];
        assert_eq!(
            format_projects(&projects),
            "- Inbox (ID: 1) [Inbox]\n- Home (ID: 2) [Favorite]"
        );
    }
}
