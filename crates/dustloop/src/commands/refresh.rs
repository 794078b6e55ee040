//! Forced refetch of the move table.

use dustloop_core::FrameDataService;

use crate::error::CliError;
use crate::output;

pub async fn handle(service: &FrameDataService) -> Result<(), CliError> {
    let store = service.store();
    let records = store.refresh().await?;
    let path = store.snapshot_path().display();
    let line = if store.snapshot_in_sync() {
        format!("Fetched {} moves; snapshot at {path}", records.len())
    } else {
        format!(
            "Fetched {} moves; snapshot could not be written to {path}",
            records.len()
        )
    };
    output::print_output(&line)
}
