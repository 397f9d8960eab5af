//! Team schedule lookup.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    dates: Vec<ScheduleDate>,
}

#[derive(Debug, Default, Deserialize)]
struct ScheduleDate {
    #[serde(default)]
    games: Vec<ScheduleGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleGame {
    game_pk: i64,
    #[serde(default)]
    game_type: String,
}

/// Fetches the game keys for one team's schedule over a date range,
/// excluding spring-training games.
pub async fn fetch_game_pks(
    client: &reqwest::Client,
    base_url: &str,
    team_id: i64,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<i64>> {
    let url = format!("{base_url}/api/v1/schedule");
    let params = [
        ("sportId", "1".to_string()),
        ("teamId", team_id.to_string()),
        ("startDate", start_date.to_string()),
        ("endDate", end_date.to_string()),
    ];
    let schedule: ScheduleResponse = client
        .get(&url)
        .query(&params)
        .send()
        .await
        .with_context(|| format!("fetch schedule for team {team_id}"))?
        .error_for_status()
        .context("schedule request rejected")?
        .json()
        .await
        .context("decode schedule response")?;
    let game_pks = regular_season_game_pks(&schedule);
    debug!(team_id, games = game_pks.len(), "fetched schedule");
    Ok(game_pks)
}

/// Game keys for everything except spring training (`gameType == "S"`).
fn regular_season_game_pks(schedule: &ScheduleResponse) -> Vec<i64> {
    schedule
        .dates
        .iter()
        .flat_map(|day| day.games.iter())
        .filter(|game| !game.game_type.eq_ignore_ascii_case("S"))
        .map(|game| game.game_pk)
        .collect()
}
