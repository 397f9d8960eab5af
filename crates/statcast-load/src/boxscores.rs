//! Raw boxscore replace-load.

use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use statcast_ingest::BoxscoreRow;
use tracing::info;

use crate::error::Result;

/// Insert column list, matching the raw DDL order (minus defaults).
const BOXSCORE_COLUMNS: &str = "row_num, pitcher_id, pitcher_name, game_pk, team_id, team_name, \
    games_started, fly_outs, ground_outs, air_outs, runs, doubles, triples, home_runs, \
    strike_outs, base_on_balls, intentional_walks, hits, hit_by_pitch, at_bats, \
    caught_stealing, stolen_bases, stolen_base_percentage, number_of_pitches, innings_pitched, \
    wins, losses, saves, save_opportunities, holds, blown_saves, earned_runs, batters_faced, \
    outs, complete_games, shutouts, pitches_thrown, balls, strikes, strike_percentage, \
    hit_batsmen, balks, wild_pitches, pickoffs, rbi, games_finished, runs_scored_per9, \
    home_runs_per9, inherited_runners, inherited_runners_scored, catchers_interference, \
    sac_bunts, sac_flies, passed_ball, pop_outs, line_outs, source";

/// Binds per row; keeps each INSERT under the PostgreSQL parameter limit.
const ROWS_PER_INSERT: usize = 500;

/// Replaces the contents of `raw.pitching_boxscores` with the given rows,
/// transactionally: the old season load disappears only if the new one
/// lands in full.
pub async fn replace_boxscores(pool: &PgPool, rows: &[BoxscoreRow]) -> Result<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM raw.pitching_boxscores")
        .execute(&mut *tx)
        .await?;

    for chunk in rows.chunks(ROWS_PER_INSERT) {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "INSERT INTO raw.pitching_boxscores ({BOXSCORE_COLUMNS}) "
        ));
        builder.push_values(chunk, |mut b, row| {
            let s = &row.stats;
            b.push_bind(row.row_num)
                .push_bind(row.pitcher_id)
                .push_bind(row.pitcher_name.as_deref())
                .push_bind(row.game_pk)
                .push_bind(row.team_id)
                .push_bind(row.team_name.as_deref())
                .push_bind(s.games_started)
                .push_bind(s.fly_outs)
                .push_bind(s.ground_outs)
                .push_bind(s.air_outs)
                .push_bind(s.runs)
                .push_bind(s.doubles)
                .push_bind(s.triples)
                .push_bind(s.home_runs)
                .push_bind(s.strike_outs)
                .push_bind(s.base_on_balls)
                .push_bind(s.intentional_walks)
                .push_bind(s.hits)
                .push_bind(s.hit_by_pitch)
                .push_bind(s.at_bats)
                .push_bind(s.caught_stealing)
                .push_bind(s.stolen_bases)
                .push_bind(s.stolen_base_percentage.as_deref())
                .push_bind(s.number_of_pitches)
                .push_bind(s.innings_pitched.as_deref())
                .push_bind(s.wins)
                .push_bind(s.losses)
                .push_bind(s.saves)
                .push_bind(s.save_opportunities)
                .push_bind(s.holds)
                .push_bind(s.blown_saves)
                .push_bind(s.earned_runs)
                .push_bind(s.batters_faced)
                .push_bind(s.outs)
                .push_bind(s.complete_games)
                .push_bind(s.shutouts)
                .push_bind(s.pitches_thrown)
                .push_bind(s.balls)
                .push_bind(s.strikes)
                .push_bind(s.strike_percentage.as_deref())
                .push_bind(s.hit_batsmen)
                .push_bind(s.balks)
                .push_bind(s.wild_pitches)
                .push_bind(s.pickoffs)
                .push_bind(s.rbi)
                .push_bind(s.games_finished)
                .push_bind(s.runs_scored_per9.as_deref())
                .push_bind(s.home_runs_per9.as_deref())
                .push_bind(s.inherited_runners)
                .push_bind(s.inherited_runners_scored)
                .push_bind(s.catchers_interference)
                .push_bind(s.sac_bunts)
                .push_bind(s.sac_flies)
                .push_bind(s.passed_ball)
                .push_bind(s.pop_outs)
                .push_bind(s.line_outs)
                .push_bind(row.source);
        });
        builder.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!(rows = rows.len(), "replaced raw boxscore table");
    Ok(())
}

/// Distinct pitcher ids present in the raw boxscore table; the statcast
/// extraction fans out over these.
pub async fn pitcher_ids(pool: &PgPool) -> Result<Vec<i64>> {
    let rows = sqlx::query(
        "SELECT DISTINCT pitcher_id FROM raw.pitching_boxscores \
         WHERE pitcher_id IS NOT NULL ORDER BY pitcher_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(|row| row.get::<i64, _>(0)).collect())
}
