use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::deadline::DeadlineRecord;

pub fn load_document(path: &Path) -> Result<Vec<DeadlineRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read deadlines from {}", path.display()))?;
    let records = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize deadlines from {}", path.display()))?;
    Ok(records)
}

pub fn save_document(path: &Path, records: &[DeadlineRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(records)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write deadlines to {}", path.display()))?;
    Ok(())
}
