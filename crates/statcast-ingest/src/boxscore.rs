//! Per-game pitching boxscore fetch and flattening.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
pub struct BoxscoreResponse {
    #[serde(default)]
    teams: BoxscoreTeams,
}

#[derive(Debug, Default, Deserialize)]
struct BoxscoreTeams {
    #[serde(default)]
    away: TeamBoxscore,
    #[serde(default)]
    home: TeamBoxscore,
}

#[derive(Debug, Default, Deserialize)]
struct TeamBoxscore {
    #[serde(default)]
    team: TeamInfo,
    #[serde(default)]
    players: HashMap<String, PlayerEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct TeamInfo {
    id: Option<i64>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerEntry {
    #[serde(default)]
    person: Person,
    #[serde(default)]
    stats: PlayerStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    id: Option<i64>,
    full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlayerStats {
    pitching: Option<PitchingStats>,
}

/// The pitching stat block the Stats API reports per player per game.
/// Counts arrive as JSON numbers; innings and rate fields arrive as
/// strings and are kept that way for the raw layer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PitchingStats {
    pub games_started: Option<i64>,
    pub fly_outs: Option<i64>,
    pub ground_outs: Option<i64>,
    pub air_outs: Option<i64>,
    pub runs: Option<i64>,
    pub doubles: Option<i64>,
    pub triples: Option<i64>,
    pub home_runs: Option<i64>,
    pub strike_outs: Option<i64>,
    pub base_on_balls: Option<i64>,
    pub intentional_walks: Option<i64>,
    pub hits: Option<i64>,
    pub hit_by_pitch: Option<i64>,
    pub at_bats: Option<i64>,
    pub caught_stealing: Option<i64>,
    pub stolen_bases: Option<i64>,
    pub stolen_base_percentage: Option<String>,
    pub number_of_pitches: Option<i64>,
    pub innings_pitched: Option<String>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub saves: Option<i64>,
    pub save_opportunities: Option<i64>,
    pub holds: Option<i64>,
    pub blown_saves: Option<i64>,
    pub earned_runs: Option<i64>,
    pub batters_faced: Option<i64>,
    pub outs: Option<i64>,
    pub complete_games: Option<i64>,
    pub shutouts: Option<i64>,
    pub pitches_thrown: Option<i64>,
    pub balls: Option<i64>,
    pub strikes: Option<i64>,
    pub strike_percentage: Option<String>,
    pub hit_batsmen: Option<i64>,
    pub balks: Option<i64>,
    pub wild_pitches: Option<i64>,
    pub pickoffs: Option<i64>,
    pub rbi: Option<i64>,
    pub games_finished: Option<i64>,
    pub runs_scored_per9: Option<String>,
    pub home_runs_per9: Option<String>,
    pub inherited_runners: Option<i64>,
    pub inherited_runners_scored: Option<i64>,
    pub catchers_interference: Option<i64>,
    pub sac_bunts: Option<i64>,
    pub sac_flies: Option<i64>,
    pub passed_ball: Option<i64>,
    pub pop_outs: Option<i64>,
    pub line_outs: Option<i64>,
}

impl PitchingStats {
    /// The API serves `"pitching": {}` for position players; an all-empty
    /// block means the player did not pitch.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One flattened (pitcher, game) row destined for the raw boxscore table.
#[derive(Debug, Clone, Default)]
pub struct BoxscoreRow {
    pub row_num: i64,
    pub pitcher_id: Option<i64>,
    pub pitcher_name: Option<String>,
    pub game_pk: i64,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub stats: PitchingStats,
    pub source: &'static str,
}

/// Provenance tag written with every boxscore row.
pub const BOXSCORE_SOURCE: &str = "MLB_stats_api";

/// Fetches the boxscore for every game and flattens the requested team's
/// pitching lines into rows. Games whose boxscore cannot be fetched or
/// decoded fail the run; a partial raw load is worse than a retry.
pub async fn fetch_boxscores(
    client: &reqwest::Client,
    base_url: &str,
    game_pks: &[i64],
    team_id: i64,
) -> Result<Vec<BoxscoreRow>> {
    let mut rows = Vec::new();
    for &game_pk in game_pks {
        let url = format!("{base_url}/api/v1/game/{game_pk}/boxscore");
        let boxscore: BoxscoreResponse = client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("fetch boxscore for game {game_pk}"))?
            .error_for_status()
            .with_context(|| format!("boxscore request rejected for game {game_pk}"))?
            .json()
            .await
            .with_context(|| format!("decode boxscore for game {game_pk}"))?;
        let before = rows.len();
        collect_team_pitching(&boxscore, game_pk, team_id, &mut rows);
        if rows.len() == before {
            warn!(game_pk, team_id, "no pitching lines for team in boxscore");
        }
    }
    debug!(games = game_pks.len(), rows = rows.len(), "flattened boxscores");
    Ok(rows)
}

/// Appends one row per player with a non-empty pitching block on whichever
/// side matches `team_id`. Row numbering continues across games.
fn collect_team_pitching(
    boxscore: &BoxscoreResponse,
    game_pk: i64,
    team_id: i64,
    rows: &mut Vec<BoxscoreRow>,
) {
    for side in [&boxscore.teams.away, &boxscore.teams.home] {
        if side.team.id != Some(team_id) {
            continue;
        }
        // HashMap iteration order is arbitrary; sort by player key so the
        // flattening is reproducible.
        let mut players: Vec<(&String, &PlayerEntry)> = side.players.iter().collect();
        players.sort_by(|a, b| a.0.cmp(b.0));
        for (_, player) in players {
            let Some(stats) = player.stats.pitching.as_ref() else {
                continue;
            };
            if stats.is_empty() {
                continue;
            }
            rows.push(BoxscoreRow {
                row_num: rows.len() as i64,
                pitcher_id: player.person.id,
                pitcher_name: player.person.full_name.clone(),
                game_pk,
                team_id: side.team.id,
                team_name: side.team.name.clone(),
                stats: stats.clone(),
                source: BOXSCORE_SOURCE,
            });
        }
    }
}
