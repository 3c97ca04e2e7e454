//! Dialing list command handlers.

use fenero_api::{FeneroClient, NewList};

use crate::cli::{GlobalOpts, ListsArgs, ListsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    client: &FeneroClient,
    args: ListsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let value = match args.command {
        ListsCommand::List { campaign_ids } => client.get_lists(&campaign_ids).await?,

        ListsCommand::Create {
            name,
            description,
            caller_id,
            campaign_id,
            reset_times,
            inactive,
        } => {
            let list = NewList {
                name,
                description,
                caller_id,
                campaign_id,
                reset_times,
                active: !inactive,
            };
            client.create_list(&list).await?
        }

        ListsCommand::CopyFields {
            source,
            destination,
        } => client.copy_custom_fields(&source, &destination).await?,

        ListsCommand::Start { list_id } => {
            if !util::confirm(
                &format!("Start list {list_id}? Dialing may begin immediately"),
                global.yes,
            )? {
                return Ok(());
            }
            let value = client.start_list(&list_id).await?;
            output::print_success(&format!("List {list_id} started"), &global.color, global.quiet);
            value
        }

        ListsCommand::Stop { list_id } => {
            if !util::confirm(&format!("Stop list {list_id}?"), global.yes)? {
                return Ok(());
            }
            let value = client.stop_list(&list_id).await?;
            output::print_success(&format!("List {list_id} stopped"), &global.color, global.quiet);
            value
        }
    };

    output::print_output(&output::render_value(&global.output, &value), global.quiet);
    Ok(())
}
