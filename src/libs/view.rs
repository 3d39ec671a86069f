use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE DATE", "PRIORITY", "STATUS", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                task.priority,
                task.status,
                task.created_at.format("%Y-%m-%d %H:%M"),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        Self::tasks(std::slice::from_ref(task))
    }
}
