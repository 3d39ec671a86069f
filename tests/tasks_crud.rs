#[cfg(test)]
mod tests {
    use taskpad::db::tasks::Tasks;
    use taskpad::libs::error::TaskError;
    use taskpad::libs::task::{Priority, Status, Task, TaskFilter, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_assigns_unique_id_and_pending_status(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = Task::new("Write report", None, None, Priority::High).unwrap();
        let second = Task::new("Write report", None, None, Priority::High).unwrap();

        // UUID v4 string ids, unique even for identical inputs
        assert_eq!(first.id.len(), 36);
        assert_ne!(first.id, second.id);
        assert_eq!(first.status, Status::Pending);

        tasks.insert(&first).unwrap();
        tasks.insert(&second).unwrap();

        let stored = tasks.get_by_id(&first.id).unwrap().unwrap();
        assert_eq!(stored.title, "Write report");
        assert_eq!(stored.priority, Priority::High);
        assert_eq!(stored.status, Status::Pending);
        assert_eq!(stored.created_at, first.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_with_empty_title_fails(_ctx: &mut TaskTestContext) {
        let err = Task::new("", None, None, Priority::Low).unwrap_err();
        assert!(matches!(err, TaskError::Validation { field: "title", .. }));

        // Whitespace-only titles are rejected too
        let err = Task::new("   ", None, None, Priority::Low).unwrap_err();
        assert!(matches!(err, TaskError::Validation { field: "title", .. }));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("Original title", Some("Original description".to_string()), None, Priority::Low).unwrap();
        tasks.insert(&task).unwrap();

        let patch = TaskPatch {
            title: Some("Updated title".to_string()),
            description: Some("Updated description".to_string()),
            due_date: Some("2026-09-01".parse().unwrap()),
            priority: Some(Priority::High),
            status: Some(Status::InProgress),
        };
        tasks.update(&task.id, &patch).unwrap();

        let updated = tasks.get_by_id(&task.id).unwrap().unwrap();
        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.description.as_deref(), Some("Updated description"));
        assert_eq!(updated.due_date, Some("2026-09-01".parse().unwrap()));
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.status, Status::InProgress);

        // Immutable fields survive the update
        assert_eq!(updated.id, task.id);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_unknown_id_fails_with_not_found(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let patch = TaskPatch {
            title: Some("Anything".to_string()),
            ..Default::default()
        };
        let err = tasks.update("00000000-0000-0000-0000-000000000000", &patch).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_rejects_empty_patch_and_empty_title(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("Keep me intact", None, None, Priority::Medium).unwrap();
        tasks.insert(&task).unwrap();

        let err = tasks.update(&task.id, &TaskPatch::default()).unwrap_err();
        assert!(matches!(err, TaskError::Validation { .. }));

        let patch = TaskPatch {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        let err = tasks.update(&task.id, &patch).unwrap_err();
        assert!(matches!(err, TaskError::Validation { field: "title", .. }));

        // No partial write happened
        let stored = tasks.get_by_id(&task.id).unwrap().unwrap();
        assert_eq!(stored.title, "Keep me intact");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_is_idempotent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("Finish review", None, None, Priority::Medium).unwrap();
        tasks.insert(&task).unwrap();

        tasks.complete(&task.id).unwrap();
        let completed = tasks.get_by_id(&task.id).unwrap().unwrap();
        assert_eq!(completed.status, Status::Completed);

        // Completing again succeeds and changes nothing
        tasks.complete(&task.id).unwrap();
        let still_completed = tasks.get_by_id(&task.id).unwrap().unwrap();
        assert_eq!(still_completed.status, Status::Completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_unknown_id_fails_with_not_found(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks.complete("11111111-1111-1111-1111-111111111111").unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_then_reference_fails_with_not_found(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("Throwaway", None, None, Priority::Low).unwrap();
        tasks.insert(&task).unwrap();

        tasks.delete(&task.id).unwrap();
        assert!(tasks.get_by_id(&task.id).unwrap().is_none());

        assert!(matches!(tasks.delete(&task.id).unwrap_err(), TaskError::NotFound(_)));
        assert!(matches!(tasks.complete(&task.id).unwrap_err(), TaskError::NotFound(_)));
        let patch = TaskPatch {
            status: Some(Status::InProgress),
            ..Default::default()
        };
        assert!(matches!(tasks.update(&task.id, &patch).unwrap_err(), TaskError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_full_task_lifecycle(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // Add("Buy milk", priority=Low) -> Pending
        let task = Task::new("Buy milk", None, None, Priority::Low).unwrap();
        tasks.insert(&task).unwrap();
        assert_eq!(task.status, Status::Pending);

        // List() contains it
        let all = tasks.fetch(&TaskFilter::default()).unwrap();
        assert!(all.iter().any(|t| t.id == task.id));

        // Complete(id) -> Completed, visible through the status filter
        tasks.complete(&task.id).unwrap();
        let completed = tasks
            .fetch(&TaskFilter {
                status: Some(Status::Completed),
                ..Default::default()
            })
            .unwrap();
        assert!(completed.iter().any(|t| t.id == task.id));

        // Delete(id) -> gone from listings, second delete is NotFound
        tasks.delete(&task.id).unwrap();
        let all = tasks.fetch(&TaskFilter::default()).unwrap();
        assert!(!all.iter().any(|t| t.id == task.id));
        assert!(matches!(tasks.delete(&task.id).unwrap_err(), TaskError::NotFound(_)));
    }
}
