#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskpad::db::migrations::{get_db_version, init_with_migrations, needs_migration};

    fn open_temp_db() -> (tempfile::TempDir, Connection) {
        let temp_dir = tempfile::tempdir().unwrap();
        let conn = Connection::open(temp_dir.path().join("taskpad.db")).unwrap();
        (temp_dir, conn)
    }

    #[test]
    fn test_migrations_apply_and_are_idempotent() {
        let (_dir, mut conn) = open_temp_db();

        assert!(needs_migration(&conn).unwrap());
        init_with_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
        assert!(!needs_migration(&conn).unwrap());

        // Safe to run against an already-initialized store
        init_with_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_schema_rejects_out_of_range_priority() {
        let (_dir, mut conn) = open_temp_db();
        init_with_migrations(&mut conn).unwrap();

        // Bypass application validation entirely: the CHECK constraint
        // still rejects the value.
        let result = conn.execute(
            "INSERT INTO tasks (id, title, priority_level, status) VALUES (?1, ?2, ?3, ?4)",
            ["a2e8b0f4-0000-4000-8000-000000000001", "Sneaky", "Urgent", "Pending"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_out_of_range_status() {
        let (_dir, mut conn) = open_temp_db();
        init_with_migrations(&mut conn).unwrap();

        let result = conn.execute(
            "INSERT INTO tasks (id, title, priority_level, status) VALUES (?1, ?2, ?3, ?4)",
            ["a2e8b0f4-0000-4000-8000-000000000002", "Sneaky", "Low", "Paused"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_duplicate_id() {
        let (_dir, mut conn) = open_temp_db();
        init_with_migrations(&mut conn).unwrap();

        let insert = "INSERT INTO tasks (id, title, priority_level, status) VALUES (?1, ?2, ?3, ?4)";
        conn.execute(insert, ["a2e8b0f4-0000-4000-8000-000000000003", "First", "Low", "Pending"])
            .unwrap();
        let result = conn.execute(insert, ["a2e8b0f4-0000-4000-8000-000000000003", "Second", "Low", "Pending"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_empty_title() {
        let (_dir, mut conn) = open_temp_db();
        init_with_migrations(&mut conn).unwrap();

        let result = conn.execute(
            "INSERT INTO tasks (id, title, priority_level, status) VALUES (?1, ?2, ?3, ?4)",
            ["a2e8b0f4-0000-4000-8000-000000000004", "   ", "Low", "Pending"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_indexes_exist() {
        let (_dir, mut conn) = open_temp_db();
        init_with_migrations(&mut conn).unwrap();

        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'tasks'")
            .unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        for expected in ["idx_tasks_due_date", "idx_tasks_priority", "idx_tasks_status"] {
            assert!(names.iter().any(|n| n == expected), "missing index {}", expected);
        }
    }
}
