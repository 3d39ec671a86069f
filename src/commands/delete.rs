//! Task deletion command.
//!
//! Deletion is permanent, so the command asks for confirmation unless `--yes`
//! is passed.

use crate::{
    db::tasks::Tasks,
    libs::{error::TaskError, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id
    #[arg(required = true)]
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    // Unknown ids fail before the prompt is shown.
    let task = tasks.get_by_id(&args.id)?.ok_or_else(|| TaskError::NotFound(args.id.clone()))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tasks.delete(&args.id)?;
    msg_success!(Message::TaskDeleted(args.id));

    Ok(())
}
