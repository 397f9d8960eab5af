//! Primary-key uniqueness enforcement.

use std::collections::BTreeMap;

use polars::prelude::*;
use statcast_common::column_value_string;
use statcast_model::columns::DEDUPE_SORT_ORDER;
use tracing::warn;

use crate::error::{Result, StagingError};

/// Bound on the duplicate-key sample included in the diagnostic.
const DUPLICATE_SAMPLE_LIMIT: usize = 25;

/// Enforces uniqueness of the given key columns.
///
/// Fails with [`StagingError::MissingKeyColumns`] when a declared key
/// column is absent from the batch; a dedup over a partial key must never
/// run silently. With no duplicates the input is returned unchanged (in
/// its original row order).
///
/// When duplicates exist, the batch is sorted ascending by whichever of
/// `(game_pk, at_bat_number, pitch_number, game_date)` are present, in
/// that priority order, and only the last row of each duplicate key group
/// survives; late corrections appended after initial ingestion win over
/// the rows they correct. The surviving rows come back in sorted order.
pub fn enforce_unique_key(df: &DataFrame, key_columns: &[String]) -> Result<DataFrame> {
    let missing: Vec<String> = key_columns
        .iter()
        .filter(|name| df.column(name).is_err())
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(StagingError::MissingKeyColumns(missing));
    }
    if df.height() == 0 || key_columns.is_empty() {
        return Ok(df.clone());
    }

    let keys = composite_keys(df, key_columns);
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for key in &keys {
        *occurrences.entry(key.as_str()).or_insert(0) += 1;
    }
    let duplicate_rows = keys
        .iter()
        .filter(|key| occurrences[key.as_str()] > 1)
        .count();
    if duplicate_rows == 0 {
        return Ok(df.clone());
    }

    let sample: Vec<&str> = keys
        .iter()
        .filter(|key| occurrences[key.as_str()] > 1)
        .take(DUPLICATE_SAMPLE_LIMIT)
        .map(String::as_str)
        .collect();
    warn!(
        rows = duplicate_rows,
        key = ?key_columns,
        sample = ?sample,
        "resolving duplicate primary keys, keeping latest per key"
    );

    let sorted = sort_for_tiebreak(df)?;
    let sorted_keys = composite_keys(&sorted, key_columns);
    let mut last_row_for_key: BTreeMap<&str, usize> = BTreeMap::new();
    for (idx, key) in sorted_keys.iter().enumerate() {
        last_row_for_key.insert(key.as_str(), idx);
    }
    let keep: Vec<bool> = sorted_keys
        .iter()
        .enumerate()
        .map(|(idx, key)| last_row_for_key[key.as_str()] == idx)
        .collect();
    let mask = BooleanChunked::from_slice("unique_key".into(), &keep);
    Ok(sorted.filter(&mask)?)
}

/// `|`-joined string rendering of each row's key tuple.
fn composite_keys(df: &DataFrame, key_columns: &[String]) -> Vec<String> {
    (0..df.height())
        .map(|idx| {
            let mut composite = String::new();
            for (pos, name) in key_columns.iter().enumerate() {
                if pos > 0 {
                    composite.push('|');
                }
                composite.push_str(column_value_string(df, name, idx).trim());
            }
            composite
        })
        .collect()
}

/// Stable ascending sort by the tie-break columns present in the batch.
/// Stability matters: among duplicates that tie on every sort column, the
/// most recently appended row keeps its later position and therefore wins.
fn sort_for_tiebreak(df: &DataFrame) -> PolarsResult<DataFrame> {
    let by: Vec<PlSmallStr> = DEDUPE_SORT_ORDER
        .iter()
        .filter(|name| df.column(name).is_ok())
        .map(|name| (*name).into())
        .collect();
    if by.is_empty() {
        return Ok(df.clone());
    }
    df.sort(
        by,
        SortMultipleOptions::default()
            .with_nulls_last(true)
            .with_maintain_order(true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn missing_key_column_is_a_configuration_error() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), vec![100i64]).into(),
        ])
        .unwrap();

        let err = enforce_unique_key(&df, &keys(&["game_pk", "pitch_number"])).unwrap_err();

        match err {
            StagingError::MissingKeyColumns(missing) => {
                assert_eq!(missing, vec!["pitch_number".to_string()]);
            }
            other => panic!("expected MissingKeyColumns, got {other:?}"),
        }
    }

    #[test]
    fn unique_input_passes_through_unchanged() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), vec![101i64, 100]).into(),
            Series::new("at_bat_number".into(), vec![1i64, 1]).into(),
            Series::new("pitch_number".into(), vec![1i64, 1]).into(),
        ])
        .unwrap();

        let out = enforce_unique_key(&df, &keys(&["game_pk", "at_bat_number", "pitch_number"]))
            .unwrap();

        // No duplicates: not even reordered.
        assert!(out.equals_missing(&df));
    }

    #[test]
    fn later_game_date_wins_among_duplicates() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), vec![100i64, 100]).into(),
            Series::new("at_bat_number".into(), vec![3i64, 3]).into(),
            Series::new("pitch_number".into(), vec![2i64, 2]).into(),
            Series::new("game_date".into(), vec!["2025-04-03", "2025-04-01"]).into(),
            Series::new("release_speed".into(), vec![95.1, 94.2]).into(),
        ])
        .unwrap();

        let out = enforce_unique_key(&df, &keys(&["game_pk", "at_bat_number", "pitch_number"]))
            .unwrap();

        assert_eq!(out.height(), 1);
        let date = out.column("game_date").unwrap().str().unwrap();
        assert_eq!(date.get(0), Some("2025-04-03"));
        let speed = out.column("release_speed").unwrap().f64().unwrap();
        assert_eq!(speed.get(0), Some(95.1));
    }

    #[test]
    fn full_tie_keeps_the_latest_appended_row() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), vec![100i64, 100]).into(),
            Series::new("at_bat_number".into(), vec![3i64, 3]).into(),
            Series::new("pitch_number".into(), vec![2i64, 2]).into(),
            Series::new("game_date".into(), vec!["2025-04-01", "2025-04-01"]).into(),
            Series::new("release_speed".into(), vec![94.2, 95.1]).into(),
        ])
        .unwrap();

        let out = enforce_unique_key(&df, &keys(&["game_pk", "at_bat_number", "pitch_number"]))
            .unwrap();

        assert_eq!(out.height(), 1);
        let speed = out.column("release_speed").unwrap().f64().unwrap();
        assert_eq!(speed.get(0), Some(95.1));
    }

    #[test]
    fn survivors_come_back_in_sort_order() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), vec![200i64, 100, 200]).into(),
            Series::new("at_bat_number".into(), vec![1i64, 5, 1]).into(),
            Series::new("pitch_number".into(), vec![4i64, 2, 4]).into(),
            Series::new("game_date".into(), vec!["2025-05-01", "2025-04-20", "2025-05-02"])
                .into(),
        ])
        .unwrap();

        let out = enforce_unique_key(&df, &keys(&["game_pk", "at_bat_number", "pitch_number"]))
            .unwrap();

        assert_eq!(out.height(), 2);
        let game_pk = out.column("game_pk").unwrap().i64().unwrap();
        assert_eq!(game_pk.get(0), Some(100));
        assert_eq!(game_pk.get(1), Some(200));
        let date = out.column("game_date").unwrap().str().unwrap();
        assert_eq!(date.get(1), Some("2025-05-02"));
    }

    #[test]
    fn empty_batch_is_returned_as_is() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), Vec::<i64>::new()).into(),
        ])
        .unwrap();
        let out = enforce_unique_key(&df, &keys(&["game_pk"])).unwrap();
        assert_eq!(out.height(), 0);
    }
}
