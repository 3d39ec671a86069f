//! Task update command.
//!
//! Applies a partial set of field changes; anything not passed on the command
//! line is left untouched. The id and creation timestamp cannot be changed.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Status, TaskPatch},
        view::View,
    },
    msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Task id
    #[arg(required = true)]
    id: String,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New due date in YYYY-MM-DD format
    #[arg(short = 'u', long, value_name = "DATE")]
    due: Option<NaiveDate>,
    /// New priority level
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
    /// New status
    #[arg(short, long, value_enum)]
    status: Option<Status>,
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let patch = TaskPatch {
        title: args.title,
        description: args.description,
        due_date: args.due,
        priority: args.priority,
        status: args.status,
    };

    let mut tasks = Tasks::new()?;
    tasks.update(&args.id, &patch)?;

    msg_success!(Message::TaskUpdated(args.id.clone()));
    if let Some(task) = tasks.get_by_id(&args.id)? {
        View::task(&task)?;
    }

    Ok(())
}
