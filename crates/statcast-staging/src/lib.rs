//! Cleaning and normalization pipeline for statcast pitch batches.
//!
//! The provider hands over one loosely-typed row per pitch; this crate
//! turns a batch of them into a typed, deduplicated frame ready for bulk
//! insertion into the warehouse fact table. Stages, in order:
//!
//! 1. derive semantic outcome fields from the raw `description` code
//! 2. null physically implausible measurement values
//! 3. drop rows without a `pitch_type`
//! 4. coerce every declared column to its canonical type
//! 5. enforce primary-key uniqueness with a deterministic tie-break
//!
//! Everything is a synchronous, single-owner transformation over an
//! in-memory `DataFrame`; no I/O happens here.

pub mod clean;
pub mod dedupe;
pub mod derive;
pub mod error;
pub mod normalize;
pub mod pipeline;

pub use clean::{drop_missing_pitch_type, null_out_of_range};
pub use dedupe::enforce_unique_key;
pub use derive::add_derived_fields;
pub use error::{Result, StagingError};
pub use normalize::{normalize_types, parse_game_date};
pub use pipeline::{StagedPitches, StagingReport, stage_pitches};
