//! Statcast pitch-level extraction.
//!
//! Baseball Savant's search endpoint serves a CSV export of every tracked
//! pitch for one pitcher over a date range. Batches are read with schema
//! inference disabled: every column comes through as a string and the
//! staging normalizer owns all typing.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::debug;

/// Downloads one pitcher's pitch-by-pitch export for a date range.
pub async fn fetch_statcast_pitches(
    client: &reqwest::Client,
    base_url: &str,
    pitcher_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<DataFrame> {
    let url = format!("{base_url}/statcast_search/csv");
    let params = [
        ("all", "true".to_string()),
        ("player_type", "pitcher".to_string()),
        ("pitchers_lookup[]", pitcher_id.to_string()),
        ("game_date_gt", start_date.to_string()),
        ("game_date_lt", end_date.to_string()),
        ("type", "details".to_string()),
    ];
    let body = client
        .get(&url)
        .query(&params)
        .send()
        .await
        .with_context(|| format!("fetch statcast export for pitcher {pitcher_id}"))?
        .error_for_status()
        .with_context(|| format!("statcast request rejected for pitcher {pitcher_id}"))?
        .bytes()
        .await
        .context("read statcast response body")?;
    let frame = read_pitches_csv(body.to_vec())
        .with_context(|| format!("parse statcast export for pitcher {pitcher_id}"))?;
    debug!(pitcher_id, rows = frame.height(), "fetched statcast pitches");
    Ok(frame)
}

/// Parses a statcast CSV body, every column as a string.
pub fn read_pitches_csv(body: Vec<u8>) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(body))
        .finish()
        .context("parse pitch csv")?;
    Ok(frame)
}

/// Reads a previously written export file, every column as a string.
pub fn read_export(path: &Path) -> Result<DataFrame> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open export: {}", path.display()))?
        .finish()
        .with_context(|| format!("parse export: {}", path.display()))?;
    Ok(frame)
}

/// Writes a combined export file with a header row.
pub fn write_export(frame: &DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create export: {}", path.display()))?;
    let mut out = frame.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut out)
        .with_context(|| format!("write export: {}", path.display()))?;
    Ok(())
}

/// Vertically stacks per-pitcher batches into one frame. `None` when no
/// batch carried any rows.
pub fn stack_batches(batches: Vec<DataFrame>) -> Result<Option<DataFrame>> {
    let mut batches = batches.into_iter().filter(|frame| frame.height() > 0);
    let Some(mut combined) = batches.next() else {
        return Ok(None);
    };
    for batch in batches {
        combined
            .vstack_mut(&batch)
            .context("stack statcast batches with mismatched columns")?;
    }
    Ok(Some(combined))
}
