//! Task data-access layer.
//!
//! Maps the CRUD operations onto SQL statements over the `tasks` table. All
//! methods validate input before touching the database, so a failed operation
//! never leaves a partial write behind. Enum-valued columns carry CHECK
//! constraints, which means out-of-range values are rejected by the storage
//! layer even if a caller bypasses application validation.

use crate::db::db::Db;
use crate::libs::error::TaskError;
use crate::libs::task::{Status, Task, TaskFilter, TaskPatch};
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id VARCHAR(36) PRIMARY KEY,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    description TEXT,
    due_date DATE,
    priority_level TEXT NOT NULL CHECK (priority_level IN ('Low', 'Medium', 'High')),
    status TEXT NOT NULL DEFAULT 'Pending' CHECK (status IN ('Pending', 'In Progress', 'Completed')),
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TASK: &str =
    "INSERT INTO tasks (id, title, description, due_date, priority_level, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT id, title, description, due_date, priority_level, status, created_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
// Stable listing order: due date ascending with undated tasks last,
// then creation time.
const ORDER_TASKS: &str = "ORDER BY due_date IS NULL, due_date, created_at";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the database and ensures the tasks table exists.
    ///
    /// Migration v1 creates the table officially; the execute here keeps the
    /// module usable against a bare connection as well.
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Persists a new task record.
    pub fn insert(&mut self, task: &Task) -> Result<(), TaskError> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.due_date,
                task.priority,
                task.status,
                task.created_at
            ],
        )?;

        Ok(())
    }

    /// Fetches tasks matching the filter, in stable listing order.
    ///
    /// An empty result is `Ok(vec![])`, never an error.
    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            values.push(Value::Text(status.to_string()));
        }
        if let Some(priority) = filter.priority {
            conditions.push("priority_level = ?");
            values.push(Value::Text(priority.to_string()));
        }
        if let Some(due) = filter.due {
            conditions.push("due_date = ?");
            values.push(Value::Text(due.to_string()));
        }
        if let Some(due_from) = filter.due_from {
            conditions.push("due_date >= ?");
            values.push(Value::Text(due_from.to_string()));
        }
        if let Some(due_to) = filter.due_to {
            conditions.push("due_date <= ?");
            values.push(Value::Text(due_to.to_string()));
        }

        let mut sql = SELECT_TASKS.to_string();
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(ORDER_TASKS);

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Looks up a single task by id.
    pub fn get_by_id(&mut self, id: &str) -> Result<Option<Task>, TaskError> {
        let sql = format!("{} {}", SELECT_TASKS, WHERE_ID);
        let task = self.conn.query_row(&sql, params![id], Self::map_row).optional()?;

        Ok(task)
    }

    /// Applies a partial set of field changes to the task identified by `id`.
    ///
    /// The patch is validated up front; a rejected patch performs no write.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<(), TaskError> {
        patch.validate()?;

        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = &patch.title {
            sets.push("title = ?");
            values.push(Value::Text(title.trim().to_string()));
        }
        if let Some(description) = &patch.description {
            sets.push("description = ?");
            values.push(Value::Text(description.clone()));
        }
        if let Some(due_date) = patch.due_date {
            sets.push("due_date = ?");
            values.push(Value::Text(due_date.to_string()));
        }
        if let Some(priority) = patch.priority {
            sets.push("priority_level = ?");
            values.push(Value::Text(priority.to_string()));
        }
        if let Some(status) = patch.status {
            sets.push("status = ?");
            values.push(Value::Text(status.to_string()));
        }

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
        values.push(Value::Text(id.to_string()));

        let affected = self.conn.execute(&sql, params_from_iter(values))?;
        if affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Sets the task's status to Completed.
    ///
    /// Idempotent: completing an already-completed task is a no-op success.
    pub fn complete(&mut self, id: &str) -> Result<(), TaskError> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, Status::Completed])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }

    /// Permanently removes the task. Hard delete, no tombstone.
    pub fn delete(&mut self, id: &str) -> Result<(), TaskError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get(3)?,
            priority: row.get(4)?,
            status: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
