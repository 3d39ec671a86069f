//! Core task domain types.
//!
//! Defines the [`Task`] entity together with its two closed enumerations,
//! [`Priority`] and [`Status`]. The enums implement `Display`/`FromStr` for
//! user-facing text, `clap::ValueEnum` for argument parsing, and
//! `ToSql`/`FromSql` so the same fixed variant set is enforced at the CLI
//! boundary, in the application, and in the database.

use crate::libs::error::TaskError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TaskError::validation(
                "priority",
                format!("'{}' is not one of Low, Medium, High", other),
            )),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in progress" | "in-progress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            other => Err(TaskError::validation(
                "status",
                format!("'{}' is not one of Pending, In Progress, Completed", other),
            )),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// A single to-do item.
///
/// The `id` and `created_at` fields are assigned once by [`Task::new`] and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: Status,
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Creates a new task with a generated UUID and creation timestamp.
    ///
    /// Status always starts as [`Status::Pending`]. Fails with a validation
    /// error when the title is empty or whitespace-only.
    pub fn new(title: &str, description: Option<String>, due_date: Option<NaiveDate>, priority: Priority) -> Result<Self, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::validation("title", "cannot be empty"));
        }

        Ok(Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            due_date,
            priority,
            status: Status::Pending,
            created_at: Local::now().naive_local(),
        })
    }
}

/// Optional restrictions applied when listing tasks.
///
/// All set fields combine with AND; a default filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Exact due date match.
    pub due: Option<NaiveDate>,
    /// Inclusive lower bound on the due date.
    pub due_from: Option<NaiveDate>,
    /// Inclusive upper bound on the due date.
    pub due_to: Option<NaiveDate>,
}

/// A partial set of field changes for an existing task.
///
/// `None` fields are left untouched; `id` and `created_at` can never change.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none() && self.priority.is_none() && self.status.is_none()
    }

    /// Checks the patch before it reaches the database.
    ///
    /// An empty patch and an empty replacement title are both rejected, so a
    /// failed update never performs a partial write.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.is_empty() {
            return Err(TaskError::validation("update", "no fields to change"));
        }
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(TaskError::validation("title", "cannot be empty"));
            }
        }
        Ok(())
    }
}
