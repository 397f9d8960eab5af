//! Command implementations.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use statcast_ingest::{SAVANT_BASE_URL, STATS_API_BASE_URL};
use statcast_load::DbConfig;
use statcast_staging::{StagingReport, stage_pitches};

use crate::cli::{BoxscoresArgs, StageArgs, StatcastArgs};

/// Outcome of a `stage` run, for the summary table.
pub struct StageOutcome {
    pub report: StagingReport,
    /// Rows written to the fact table; `None` on a dry run.
    pub loaded: Option<usize>,
}

pub async fn run_init_tables() -> Result<()> {
    let pool = connect().await?;
    statcast_load::init_tables(&pool)
        .await
        .context("initialize warehouse tables")?;
    Ok(())
}

pub async fn run_boxscores(args: &BoxscoresArgs) -> Result<()> {
    let client = reqwest::Client::new();
    let game_pks = statcast_ingest::fetch_game_pks(
        &client,
        STATS_API_BASE_URL,
        args.team_id,
        &args.start,
        &args.end,
    )
    .await?;
    info!(games = game_pks.len(), team_id = args.team_id, "fetched schedule");

    let rows =
        statcast_ingest::fetch_boxscores(&client, STATS_API_BASE_URL, &game_pks, args.team_id)
            .await?;
    info!(rows = rows.len(), "flattened pitching boxscores");

    let pool = connect().await?;
    statcast_load::replace_boxscores(&pool, &rows)
        .await
        .context("load raw boxscores")?;
    Ok(())
}

pub async fn run_statcast(args: &StatcastArgs) -> Result<()> {
    let pool = connect().await?;
    let pitcher_ids = statcast_load::pitcher_ids(&pool)
        .await
        .context("list pitchers from raw boxscores")?;
    if pitcher_ids.is_empty() {
        warn!("no pitchers in raw.pitching_boxscores; run `boxscores` first");
        return Ok(());
    }

    let client = reqwest::Client::new();
    let bar = ProgressBar::new(pitcher_ids.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} pitchers")
            .context("progress template")?,
    );
    let mut batches = Vec::with_capacity(pitcher_ids.len());
    for pitcher_id in pitcher_ids {
        let frame = statcast_ingest::fetch_statcast_pitches(
            &client,
            SAVANT_BASE_URL,
            pitcher_id,
            &args.start,
            &args.end,
        )
        .await?;
        batches.push(frame);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let Some(combined) = statcast_ingest::stack_batches(batches)? else {
        warn!("statcast returned no pitches for any pitcher");
        return Ok(());
    };
    statcast_ingest::write_export(&combined, &args.export)?;
    info!(rows = combined.height(), export = %args.export.display(), "wrote statcast export");
    Ok(())
}

pub async fn run_stage(args: &StageArgs) -> Result<StageOutcome> {
    let frame = statcast_ingest::read_export(&args.input)?;
    let key_columns: Vec<String> = match &args.key {
        Some(columns) => columns.clone(),
        None => statcast_model::columns::PRIMARY_KEY
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    };

    let staged = stage_pitches(frame, &key_columns).context("stage statcast export")?;

    let loaded = if args.dry_run {
        None
    } else {
        let pool = connect().await?;
        let count = statcast_load::load_pitches(&pool, &staged.frame)
            .await
            .context("load staged pitches")?;
        Some(count)
    };
    Ok(StageOutcome {
        report: staged.report,
        loaded,
    })
}

async fn connect() -> Result<statcast_load::PgPool> {
    let config = DbConfig::from_env().context("read database configuration")?;
    let pool = config
        .connect()
        .await
        .with_context(|| format!("connect to {}:{}/{}", config.host, config.port, config.database))?;
    Ok(pool)
}
