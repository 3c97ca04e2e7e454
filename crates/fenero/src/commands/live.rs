//! Real-time stats and session monitoring handlers.

use fenero_api::{FeneroClient, SessionTarget};

use crate::cli::{GlobalOpts, SessionArgs, StatsArgs};
use crate::error::CliError;
use crate::output;

impl From<SessionArgs> for SessionTarget {
    fn from(args: SessionArgs) -> Self {
        Self {
            session_id: args.session_id,
            server_ip: args.server_ip,
            user_phone: args.user_phone,
            agent_id: args.agent_id,
        }
    }
}

pub async fn stats(
    client: &FeneroClient,
    args: StatsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let value = client
        .get_realtime_stats(&args.campaign_ids, &args.group_ids)
        .await?;
    output::print_output(&output::render_value(&global.output, &value), global.quiet);
    Ok(())
}

pub async fn monitor(
    client: &FeneroClient,
    args: SessionArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let value = client.monitor(&args.into()).await?;
    output::print_output(&output::render_value(&global.output, &value), global.quiet);
    Ok(())
}

pub async fn barge(
    client: &FeneroClient,
    args: SessionArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let value = client.barge(&args.into()).await?;
    output::print_output(&output::render_value(&global.output, &value), global.quiet);
    Ok(())
}
