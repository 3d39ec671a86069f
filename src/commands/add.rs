//! Task creation command.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Task},
        view::View,
    },
    msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer free-text description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date in YYYY-MM-DD format
    #[arg(short = 'u', long, value_name = "DATE")]
    due: Option<NaiveDate>,
    /// Priority level
    #[arg(short, long, value_enum, default_value = "medium")]
    priority: Priority,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let task = Task::new(&args.title, args.description, args.due, args.priority)?;
    Tasks::new()?.insert(&task)?;

    msg_success!(Message::TaskAdded(task.id.clone()));
    View::task(&task)?;

    Ok(())
}
