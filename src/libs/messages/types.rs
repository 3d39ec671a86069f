#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),            // id
    TaskUpdated(String),          // id
    TaskCompleted(String),        // id
    TaskAlreadyCompleted(String), // id
    TaskDeleted(String),          // id
    TasksNotFound,
    TasksHeader,
    ConfirmDeleteTask(String), // title
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptDbPath,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
