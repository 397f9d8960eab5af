//! Idempotent warehouse DDL.
//!
//! The raw layer mirrors what the providers hand over; the analytics fact
//! table is generated from the declared column catalog so the loader, the
//! staging pipeline, and the DDL can never disagree about names.

use sqlx::PgPool;
use statcast_model::columns::{
    COUNT_COLUMNS, DATE_COLUMN, FLAG_COLUMNS, IDENTIFIER_COLUMNS, MEASUREMENT_COLUMNS,
    TEXT_COLUMNS,
};
use tracing::info;

use crate::error::Result;

/// Raw per-game pitching boxscore lines, one row per (pitcher, game).
/// Counts the Stats API serves as numbers are bigint; innings and rate
/// fields it serves as strings stay text.
const RAW_BOXSCORES_DDL: &str = "
    CREATE TABLE IF NOT EXISTS raw.pitching_boxscores (
        row_num                     bigint,
        pitcher_id                  bigint,
        pitcher_name                text,
        game_pk                     bigint,
        team_id                     bigint,
        team_name                   text,
        games_started               bigint,
        fly_outs                    bigint,
        ground_outs                 bigint,
        air_outs                    bigint,
        runs                        bigint,
        doubles                     bigint,
        triples                     bigint,
        home_runs                   bigint,
        strike_outs                 bigint,
        base_on_balls               bigint,
        intentional_walks           bigint,
        hits                        bigint,
        hit_by_pitch                bigint,
        at_bats                     bigint,
        caught_stealing             bigint,
        stolen_bases                bigint,
        stolen_base_percentage      text,
        number_of_pitches           bigint,
        innings_pitched             text,
        wins                        bigint,
        losses                      bigint,
        saves                       bigint,
        save_opportunities          bigint,
        holds                       bigint,
        blown_saves                 bigint,
        earned_runs                 bigint,
        batters_faced               bigint,
        outs                        bigint,
        complete_games              bigint,
        shutouts                    bigint,
        pitches_thrown              bigint,
        balls                       bigint,
        strikes                     bigint,
        strike_percentage           text,
        hit_batsmen                 bigint,
        balks                       bigint,
        wild_pitches                bigint,
        pickoffs                    bigint,
        rbi                         bigint,
        games_finished              bigint,
        runs_scored_per9            text,
        home_runs_per9              text,
        inherited_runners           bigint,
        inherited_runners_scored    bigint,
        catchers_interference       bigint,
        sac_bunts                   bigint,
        sac_flies                   bigint,
        passed_ball                 bigint,
        pop_outs                    bigint,
        line_outs                   bigint,
        source                      text,
        load_id                     uuid DEFAULT gen_random_uuid(),
        ingested_at                 timestamptz DEFAULT now()
    );
";

/// Declared (name, SQL type) pairs of the `analytics.pitching` fact table,
/// in DDL/insert order.
pub fn fact_columns() -> Vec<(&'static str, &'static str)> {
    let mut columns = Vec::new();
    for name in IDENTIFIER_COLUMNS {
        columns.push((*name, "bigint"));
    }
    for name in COUNT_COLUMNS {
        columns.push((*name, "bigint"));
    }
    columns.push((DATE_COLUMN, "date"));
    for name in TEXT_COLUMNS {
        columns.push((*name, "text"));
    }
    for name in MEASUREMENT_COLUMNS {
        columns.push((*name, "double precision"));
    }
    for name in FLAG_COLUMNS {
        columns.push((*name, "boolean"));
    }
    columns
}

fn pitching_fact_ddl() -> String {
    let mut ddl = String::from("CREATE TABLE IF NOT EXISTS analytics.pitching (\n");
    for (name, sql_type) in fact_columns() {
        ddl.push_str(&format!("    {name} {sql_type},\n"));
    }
    ddl.push_str("    loaded_at timestamptz DEFAULT now()\n);");
    ddl
}

/// Creates both schemas and both tables if they do not exist.
pub async fn init_tables(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE SCHEMA IF NOT EXISTS raw")
        .execute(pool)
        .await?;
    sqlx::query("CREATE SCHEMA IF NOT EXISTS analytics")
        .execute(pool)
        .await?;
    sqlx::query(RAW_BOXSCORES_DDL).execute(pool).await?;
    sqlx::query(&pitching_fact_ddl()).execute(pool).await?;
    info!("warehouse tables initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_table_covers_every_declared_column() {
        let columns = fact_columns();
        let expected = IDENTIFIER_COLUMNS.len()
            + COUNT_COLUMNS.len()
            + TEXT_COLUMNS.len()
            + MEASUREMENT_COLUMNS.len()
            + FLAG_COLUMNS.len()
            + 1;
        assert_eq!(columns.len(), expected);

        let ddl = pitching_fact_ddl();
        for (name, sql_type) in &columns {
            assert!(ddl.contains(&format!("{name} {sql_type}")), "missing {name}");
        }
        assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS analytics.pitching"));
    }

    #[test]
    fn derived_columns_are_part_of_the_fact_table() {
        let names: Vec<&str> = fact_columns().iter().map(|(name, _)| *name).collect();
        for derived in [
            "pitch_result_type",
            "is_bip",
            "is_whiff",
            "is_called_strike",
            "is_ball",
        ] {
            assert!(names.contains(&derived), "missing {derived}");
        }
    }
}
