//! Report handlers. Reports are CSV text and pass through unformatted.

use fenero_api::{FeneroClient, ReportWindow};

use crate::cli::{GlobalOpts, ReportArgs, ReportCommand, WindowArgs};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<WindowArgs> for ReportWindow {
    fn from(args: WindowArgs) -> Self {
        ReportWindow::new(args.start, args.end, args.tz_offset)
    }
}

pub async fn handle(
    client: &FeneroClient,
    args: ReportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let text = run(client, args.command).await?;

    match args.out_file {
        Some(path) => {
            util::write_file(&path, &text)?;
            output::print_success(
                &format!("Report written to {}", path.display()),
                &global.color,
                global.quiet,
            );
        }
        None => output::print_raw(&text, global.quiet)?,
    }
    Ok(())
}

async fn run(client: &FeneroClient, cmd: ReportCommand) -> Result<String, CliError> {
    let text = match cmd {
        ReportCommand::AgentActivitySummary {
            window,
            users,
            campaign_ids,
        } => {
            client
                .report_agent_activity_summary(&window.into(), &users, &campaign_ids)
                .await?
        }
        ReportCommand::AgentAuxDetail {
            window,
            report_type,
            users,
            campaign_ids,
        } => {
            client
                .report_agent_aux_detail(&window.into(), &report_type, &users, &campaign_ids)
                .await?
        }
        ReportCommand::AgentPerformanceDetail {
            window,
            report_type,
            users,
            campaign_ids,
            queue_ids,
        } => {
            client
                .report_agent_performance_detail(
                    &window.into(),
                    &report_type,
                    &users,
                    &campaign_ids,
                    &queue_ids,
                )
                .await?
        }
        ReportCommand::AgentLog {
            window,
            users,
            campaign_ids,
        } => {
            client
                .report_agent_log(&window.into(), &users, &campaign_ids)
                .await?
        }
        ReportCommand::AgentStaffTime { window, users } => {
            client.report_agent_staff_time(&window.into(), &users).await?
        }
        ReportCommand::AgentDisposition { window, users } => {
            client.report_agent_disposition(&window.into(), &users).await?
        }
        ReportCommand::CampaignDnc { campaign_ids } => {
            client.report_campaign_dnc(&campaign_ids).await?
        }
        ReportCommand::CdrInbound { window } => {
            client
                .report_call_detail_records_inbound(&window.into())
                .await?
        }
        ReportCommand::CdrOutbound { window } => {
            client
                .report_call_detail_records_outbound(&window.into())
                .await?
        }
        ReportCommand::CdrCombined { window } => {
            client
                .report_call_detail_records_combined(&window.into())
                .await?
        }
        ReportCommand::CallDetailUsage {
            window,
            report_type,
            users,
            campaign_ids,
            queue_ids,
        } => {
            client
                .report_call_detail_usage(
                    &window.into(),
                    &report_type,
                    &users,
                    &campaign_ids,
                    &queue_ids,
                )
                .await?
        }
        ReportCommand::LiveChatLog {
            window,
            chat_queue_ids,
        } => {
            client
                .report_live_chat_log(&window.into(), &chat_queue_ids)
                .await?
        }
        ReportCommand::InteractionDetail { window, filters } => {
            client
                .report_interaction_detail(
                    &window.into(),
                    &filters.list_ids,
                    &filters.disposition_ids,
                    &filters.campaign_ids,
                )
                .await?
        }
        ReportCommand::InteractionDetailLog { window, filters } => {
            client
                .report_interaction_detail_log(
                    &window.into(),
                    &filters.list_ids,
                    &filters.disposition_ids,
                    &filters.campaign_ids,
                )
                .await?
        }
        ReportCommand::SystemCallLog {
            window,
            queue_ids,
            campaign_ids,
        } => {
            client
                .report_system_call_log(&window.into(), &queue_ids, &campaign_ids)
                .await?
        }
        ReportCommand::LeadDetail { window, filters } => {
            client
                .report_lead_detail(
                    &window.into(),
                    &filters.list_ids,
                    &filters.queue_ids,
                    &filters.campaign_ids,
                )
                .await?
        }
        ReportCommand::DispositionSummary { window, filters } => {
            client
                .report_disposition_summary(
                    &window.into(),
                    &filters.list_ids,
                    &filters.queue_ids,
                    &filters.campaign_ids,
                )
                .await?
        }
        ReportCommand::FlashSummary { window, list_ids } => {
            client.report_flash_summary(&window.into(), &list_ids).await?
        }
    };
    Ok(text)
}
