//! Data model for statcast pitch-level records.
//!
//! This crate is pure vocabulary: the closed set of pitch outcome
//! categories, the flag predicates derived from raw outcome codes, and the
//! declared column catalog (type classes, measurement ranges, primary key).
//! It knows nothing about DataFrames, networks, or databases.

pub mod columns;
pub mod outcome;

pub use columns::{
    COUNT_COLUMNS, DATE_COLUMN, DEDUPE_SORT_ORDER, FLAG_COLUMNS, IDENTIFIER_COLUMNS,
    MEASUREMENT_COLUMNS, MEASUREMENT_RANGES, PRIMARY_KEY, TEXT_COLUMNS,
};
pub use outcome::{PitchResult, is_ball, is_bip, is_called_strike, is_whiff, map_pitch_result};
