//! Ingestion collaborators for the pitching warehouse: MLB Stats API
//! schedule/boxscore fetch and per-pitcher statcast CSV extraction.
//!
//! Everything here is thin I/O: fetch, deserialize, flatten. The staging
//! pipeline never touches the network; it receives a fully materialized
//! batch from this crate.

pub mod boxscore;
pub mod schedule;
pub mod statcast;

pub use boxscore::{BoxscoreRow, PitchingStats, fetch_boxscores};
pub use schedule::fetch_game_pks;
pub use statcast::{
    fetch_statcast_pitches, read_export, read_pitches_csv, stack_batches, write_export,
};

/// Default base URL for the MLB Stats API.
pub const STATS_API_BASE_URL: &str = "https://statsapi.mlb.com";

/// Default base URL for the statcast search export.
pub const SAVANT_BASE_URL: &str = "https://baseballsavant.mlb.com";
