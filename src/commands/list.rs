//! Task listing command with optional filters.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Status, TaskFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only tasks with this status
    #[arg(short, long, value_enum)]
    status: Option<Status>,
    /// Only tasks with this priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    /// Only tasks due on this exact date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", conflicts_with_all = ["due_from", "due_to"])]
    due: Option<NaiveDate>,
    /// Only tasks due on or after this date
    #[arg(long, value_name = "DATE")]
    due_from: Option<NaiveDate>,
    /// Only tasks due on or before this date
    #[arg(long, value_name = "DATE")]
    due_to: Option<NaiveDate>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = TaskFilter {
        status: args.status,
        priority: args.priority,
        due: args.due,
        due_from: args.due_from,
        due_to: args.due_to,
    };

    let tasks = Tasks::new()?.fetch(&filter)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;

    Ok(())
}
