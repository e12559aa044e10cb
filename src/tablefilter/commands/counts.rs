use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::screens::ScreenConfig;

/// Records per normalized status for a screen with a status binding.
pub fn run(records: Option<Vec<Record>>, screen: &ScreenConfig) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(binding) = &screen.status else {
        result.add_message(CmdMessage::warning(format!(
            "Screen '{}' has no status mapping",
            screen.name
        )));
        return Ok(result);
    };

    let records = records.unwrap_or_default();
    let counts = binding.map.counts(&records, &binding.source_field);
    tracing::debug!(screen = %screen.name, records = records.len(), "counted statuses");

    if records.is_empty() {
        result.add_message(CmdMessage::info("No records to count."));
    }
    Ok(result.with_counts(counts))
}
