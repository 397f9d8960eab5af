//! Warehouse collaborator: connection configuration, idempotent DDL, and
//! bulk loading of boxscore rows and staged pitch frames into PostgreSQL.

pub mod boxscores;
pub mod config;
pub mod error;
pub mod pitches;
pub mod schema;

pub use boxscores::{pitcher_ids, replace_boxscores};
pub use config::DbConfig;
pub use sqlx::PgPool;
pub use error::{LoadError, Result};
pub use pitches::load_pitches;
pub use schema::init_tables;
