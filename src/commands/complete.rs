//! Task completion command.

use crate::{
    db::tasks::Tasks,
    libs::{error::TaskError, messages::Message, task::Status},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task id
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let task = tasks.get_by_id(&args.id)?.ok_or_else(|| TaskError::NotFound(args.id.clone()))?;
    if task.status == Status::Completed {
        msg_info!(Message::TaskAlreadyCompleted(args.id));
        return Ok(());
    }

    tasks.complete(&args.id)?;
    msg_success!(Message::TaskCompleted(args.id));

    Ok(())
}
