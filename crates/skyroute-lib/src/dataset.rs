use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Load `(source, destination)` airport pairs from a delimited text file.
///
/// Each row holds two comma-separated airport codes. Surrounding whitespace
/// is trimmed and blank rows are skipped; a row without two non-empty codes
/// is a dataset error. The loader hands back plain pairs - building the
/// graph out of them is the network's job.
pub fn load_edge_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut pairs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let source = record.get(0).unwrap_or_default();
        let destination = record.get(1).unwrap_or_default();
        if source.is_empty() || destination.is_empty() {
            return Err(Error::Dataset {
                row,
                message: "expected a source and a destination airport code".to_string(),
            });
        }

        pairs.push((source.to_string(), destination.to_string()));
    }

    debug!(count = pairs.len(), path = %path.display(), "loaded edge pairs");
    Ok(pairs)
}
