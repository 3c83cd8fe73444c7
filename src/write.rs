use std::path::Path;

use tokio::fs;

use crate::{PersonRecord, Result};

/// Pretty JSON array, two-space indent, non-ASCII kept as is.
pub fn records_to_json(records: &[PersonRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Replaces whatever is at `path` with the records. Not atomic.
pub async fn write_records(path: &Path, records: &[PersonRecord]) -> Result<()> {
    let json = records_to_json(records)?;
    fs::write(path, json).await?;
    Ok(())
}
