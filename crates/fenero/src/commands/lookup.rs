//! Reference-data command handlers.

use fenero_api::FeneroClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &FeneroClient,
    cmd: &Command,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let value = match cmd {
        Command::Campaigns => client.get_campaigns_and_queues().await?,
        Command::ChatQueues => client.get_live_chat_queues().await?,
        Command::Dids => client.get_dids().await?,
        Command::Dispositions => client.get_dispositions().await?,
        Command::Users => client.get_users().await?,
        _ => unreachable!("dispatch only routes lookup commands here"),
    };
    output::print_output(&output::render_value(&global.output, &value), global.quiet);
    Ok(())
}
