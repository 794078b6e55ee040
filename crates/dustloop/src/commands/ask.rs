//! One-shot frame data question.

use dustloop_core::FrameDataService;

use crate::cli::AskArgs;
use crate::error::CliError;
use crate::output;

pub async fn handle(service: &FrameDataService, args: &AskArgs) -> Result<(), CliError> {
    let reply = service
        .lookup(&args.character, &args.move_query, &args.property)
        .await?;
    output::print_output(&reply)
}
