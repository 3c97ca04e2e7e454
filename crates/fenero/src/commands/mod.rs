//! Command dispatch: bridges CLI args -> client calls -> output formatting.

pub mod config_cmd;
pub mod lists;
pub mod live;
pub mod lookup;
pub mod recordings;
pub mod reports;
pub mod util;

use fenero_api::FeneroClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &FeneroClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Campaigns
        | Command::ChatQueues
        | Command::Dids
        | Command::Dispositions
        | Command::Users => lookup::handle(client, &cmd, global).await,
        Command::Stats(args) => live::stats(client, args, global).await,
        Command::Monitor(args) => live::monitor(client, args, global).await,
        Command::Barge(args) => live::barge(client, args, global).await,
        Command::Lists(args) => lists::handle(client, args, global).await,
        Command::Recordings(args) => recordings::handle(client, args, global).await,
        Command::Report(args) => reports::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
