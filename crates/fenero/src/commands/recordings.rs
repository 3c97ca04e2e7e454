//! Recording search and download handlers.

use fenero_api::{DateRange, FeneroClient};

use crate::cli::{GlobalOpts, RecordingsArgs, RecordingsCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &FeneroClient,
    args: RecordingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        RecordingsCommand::List {
            start,
            end,
            campaign_ids,
        } => {
            let range = DateRange::new(start, end);
            let value = client.get_recordings(&range, &campaign_ids).await?;
            output::print_output(&output::render_value(&global.output, &value), global.quiet);
            Ok(())
        }

        RecordingsCommand::Download { recording_id, dir } => {
            let path = client.stream_recording(&recording_id, &dir).await?;
            output::print_success(
                &format!("Recording saved to {}", path.display()),
                &global.color,
                global.quiet,
            );
            Ok(())
        }
    }
}
