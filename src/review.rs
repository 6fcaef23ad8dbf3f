//! GTD-style aggregations over the Todoist gateway
//!
//! Each operation composes several resource calls and returns a typed
//! report; turning reports into text is left to [`crate::formatting`].

use crate::todoist::{
    Error, NewTask, Project, Result, Task, TaskQuery, TaskUpdate, TodoistClient,
    Transport,
};
use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone, Utc};
use std::collections::HashMap;
use tracing::{info, warn};

/// Filter expression used for the overdue section of the weekly review.
const OVERDUE_FILTER: &str = "overdue";

/// How long ago an inbox task was added, relative to the review time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    /// At or after local midnight today.
    Today,
    /// At or after midnight six days before today: a 7-day window with today.
    ThisWeek,
    Older,
}

/// Local midnight of the day `now` falls on.
fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Bucket a creation timestamp. Tasks without one count as older.
pub fn age_bucket<Tz: TimeZone>(added_at: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> AgeBucket {
    let today = start_of_day(now);
    let week = today - TimeDelta::days(6);
    match added_at {
        Some(t) if t >= today => AgeBucket::Today,
        Some(t) if t >= week => AgeBucket::ThisWeek,
        _ => AgeBucket::Older,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboxReview {
    pub today: Vec<Task>,
    pub this_week: Vec<Task>,
    pub older: Vec<Task>,
}

impl InboxReview {
    /// Partition tasks by age, keeping list order inside each bucket.
    pub fn classify<Tz: TimeZone>(tasks: Vec<Task>, now: &DateTime<Tz>) -> Self {
        let mut review = InboxReview::default();
        for task in tasks {
            match age_bucket(task.added_at, now) {
                AgeBucket::Today => review.today.push(task),
                AgeBucket::ThisWeek => review.this_week.push(task),
                AgeBucket::Older => review.older.push(task),
            }
        }
        review
    }

    pub fn total(&self) -> usize {
        self.today.len() + self.this_week.len() + self.older.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InboxOutcome {
    Review(InboxReview),
    /// No project carries the inbox flag; the account data is inconsistent.
    MissingInbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLoad {
    pub project: Project,
    pub active_tasks: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyReview {
    pub projects: Vec<ProjectLoad>,
    /// Empty when the overdue query failed.
    pub overdue: Vec<Task>,
    pub no_due: Vec<Task>,
}

impl WeeklyReview {
    /// Assemble the review from already fetched data.
    pub fn build(projects: Vec<Project>, tasks: Vec<Task>, overdue: Vec<Task>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for task in &tasks {
            *counts.entry(task.project_id.as_str()).or_default() += 1;
        }

        let projects = projects
            .into_iter()
            .map(|project| {
                let active_tasks = counts.get(project.id.as_str()).copied().unwrap_or(0);
                ProjectLoad {
                    project,
                    active_tasks,
                }
            })
            .collect();

        let no_due = tasks.iter().filter(|t| t.due.is_none()).cloned().collect();

        Self {
            projects,
            overdue,
            no_due,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    Created { content: String, id: String },
    Failed { content: String, error: String },
}

/// Per-item results of a bulk create, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkCreateReport {
    pub outcomes: Vec<BulkOutcome>,
}

impl BulkCreateReport {
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BulkOutcome::Created { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.created()
    }

    /// True as soon as one item failed; created items are kept regardless.
    pub fn is_error(&self) -> bool {
        self.failed() > 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved {
        /// Matched content, or the id when the caller gave one.
        label: String,
        task: Task,
    },
    NotFound,
}

impl<T: Transport> TodoistClient<T> {
    /// Inbox tasks grouped by age relative to the current local time.
    pub async fn inbox_review(&self) -> Result<InboxOutcome> {
        let Some(inbox) = self.find_inbox_project().await? else {
            warn!("no project is flagged as the inbox");
            return Ok(InboxOutcome::MissingInbox);
        };

        let tasks = self.get_tasks(&TaskQuery::in_project(&inbox.id)).await?;
        Ok(InboxOutcome::Review(InboxReview::classify(
            tasks,
            &Local::now(),
        )))
    }

    /// Project load, overdue tasks and tasks without a due date.
    ///
    /// A failing overdue query leaves that section empty instead of failing
    /// the review.
    pub async fn weekly_review(&self) -> Result<WeeklyReview> {
        let projects = self.get_projects().await?;
        let tasks = self.get_tasks(&TaskQuery::all()).await?;

        let overdue = match self.get_tasks(&TaskQuery::filtered(OVERDUE_FILTER)).await {
            Ok(overdue) => overdue,
            Err(e) => {
                warn!(error = %e, "overdue query failed, reporting none");
                Vec::new()
            }
        };

        Ok(WeeklyReview::build(projects, tasks, overdue))
    }

    /// Create each task independently, recording success or failure per item.
    ///
    /// Nothing is rolled back, and an empty batch yields an empty report.
    pub async fn bulk_create_tasks(&self, tasks: Vec<NewTask>) -> Result<BulkCreateReport> {
        let mut report = BulkCreateReport::default();
        for task in tasks {
            if task.content.trim().is_empty() {
                report.outcomes.push(BulkOutcome::Failed {
                    content: task.content,
                    error: "content is required".to_string(),
                });
                continue;
            }

            let outcome = match self.create_task(&task).await {
                Ok(created) => BulkOutcome::Created {
                    content: created.content,
                    id: created.id,
                },
                Err(e) => BulkOutcome::Failed {
                    content: task.content,
                    error: e.to_string(),
                },
            };
            report.outcomes.push(outcome);
        }

        info!(
            created = report.created(),
            failed = report.failed(),
            "bulk create finished"
        );
        Ok(report)
    }

    /// Move a task to another project and/or section.
    ///
    /// The task is resolved first, so an unknown name reports
    /// [`MoveOutcome::NotFound`] even when no destination was given.
    pub async fn move_task(
        &self,
        task_id: Option<&str>,
        task_name: Option<&str>,
        project_id: Option<&str>,
        section_id: Option<&str>,
    ) -> Result<MoveOutcome> {
        let non_empty = |s: Option<&str>| s.filter(|v| !v.trim().is_empty()).map(str::to_string);
        let update = TaskUpdate {
            project_id: non_empty(project_id),
            section_id: non_empty(section_id),
            ..Default::default()
        };

        let resolution = self.resolve_task(task_id, task_name).await?;
        let (Some(id), Some(label)) = (resolution.id(), resolution.label()) else {
            return Ok(MoveOutcome::NotFound);
        };

        if update.project_id.is_none() && update.section_id.is_none() {
            return Err(Error::InvalidInput(
                "either project_id or section_id is required".to_string(),
            ));
        }

        let task = self.update_task(id, &update).await?;
        Ok(MoveOutcome::Moved {
            label: label.to_string(),
            task,
        })
    }
}
