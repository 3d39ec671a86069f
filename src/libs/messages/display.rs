//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Each [`Message`] variant
//! is converted here into the exact string shown on the terminal, keeping
//! wording consistent and parameters type-checked.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task {} added", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskAlreadyCompleted(id) => format!("Task {} is already completed", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'? This cannot be undone", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptDbPath => "Database file path (leave empty for the default location)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Database schema is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
