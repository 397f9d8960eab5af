//! Stage orchestration for a raw pitch batch.

use polars::prelude::DataFrame;
use tracing::info;

use crate::clean::{drop_missing_pitch_type, null_out_of_range};
use crate::dedupe::enforce_unique_key;
use crate::derive::add_derived_fields;
use crate::error::Result;
use crate::normalize::normalize_types;

/// Data-quality counts for one staging run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagingReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub measurements_nulled: usize,
    pub rows_missing_pitch_type: usize,
    pub duplicate_rows_dropped: usize,
}

/// A staged batch: the cleaned frame plus its quality report.
#[derive(Debug, Clone)]
pub struct StagedPitches {
    pub frame: DataFrame,
    pub report: StagingReport,
}

/// Runs the full staging pipeline over a raw pitch batch.
///
/// Stages run in a fixed order (derive, clean, row-filter, normalize,
/// dedupe), each consuming the previous stage's output. The only fatal
/// condition is a declared key column missing from the batch; every
/// data-quality issue is handled per-field or per-row and surfaced
/// through the report.
pub fn stage_pitches(frame: DataFrame, key_columns: &[String]) -> Result<StagedPitches> {
    let rows_in = frame.height();
    let mut frame = frame;

    add_derived_fields(&mut frame)?;
    let measurements_nulled = null_out_of_range(&mut frame)?;
    let (mut frame, rows_missing_pitch_type) = drop_missing_pitch_type(&frame)?;
    normalize_types(&mut frame)?;
    let rows_before_dedupe = frame.height();
    let frame = enforce_unique_key(&frame, key_columns)?;

    let report = StagingReport {
        rows_in,
        rows_out: frame.height(),
        measurements_nulled,
        rows_missing_pitch_type,
        duplicate_rows_dropped: rows_before_dedupe - frame.height(),
    };
    info!(
        rows_in = report.rows_in,
        rows_out = report.rows_out,
        measurements_nulled = report.measurements_nulled,
        rows_missing_pitch_type = report.rows_missing_pitch_type,
        duplicate_rows_dropped = report.duplicate_rows_dropped,
        "staged pitch batch"
    );
    Ok(StagedPitches { frame, report })
}
