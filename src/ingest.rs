use std::io;
use std::path::Path;

use anyhow::Context;

use crate::models::RawRow;

/// Reads a weekly report CSV export into header-keyed raw rows.
///
/// Structural failures (missing file, malformed CSV framing) error out so the
/// caller can re-offer file selection; row-level data quality is left to the
/// normalizer, which never errors.
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<RawRow>> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open CSV export {}", path.display()))?;
    collect_rows(reader).with_context(|| format!("failed to parse CSV export {}", path.display()))
}

/// In-memory variant of [`read_rows`], for callers that already hold the text.
pub fn parse_rows(csv_text: &str) -> anyhow::Result<Vec<RawRow>> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    collect_rows(reader).context("failed to parse CSV export")
}

fn collect_rows<R: io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<RawRow>> {
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawRow>() {
        rows.push(result?);
    }
    Ok(rows)
}
