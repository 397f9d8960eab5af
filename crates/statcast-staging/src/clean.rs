//! Measurement cleaning and row-level quality filtering.

use polars::prelude::*;
use statcast_model::columns::MEASUREMENT_RANGES;
use tracing::{debug, warn};

/// Nulls every measurement value that falls strictly outside its declared
/// physical range. Values are never clamped and rows are never dropped;
/// only the offending cell becomes null.
///
/// Columns absent from the batch are skipped, null cells are untouched,
/// and re-running the cleaner on already-clean data changes nothing.
/// Measurement columns still carried as text (raw CSV batches) are coerced
/// to floats on the way through. Returns the number of values nulled.
pub fn null_out_of_range(df: &mut DataFrame) -> PolarsResult<usize> {
    let mut nulled = 0usize;
    for (name, lo, hi) in MEASUREMENT_RANGES {
        let Ok(column) = df.column(name) else {
            continue;
        };
        let casted = column.cast(&DataType::Float64)?;
        let values = casted.f64()?;
        let mut out_count = 0usize;
        let cleaned: Float64Chunked = values
            .into_iter()
            .map(|value| match value {
                Some(v) if v < *lo || v > *hi => {
                    out_count += 1;
                    None
                }
                other => other,
            })
            .collect();
        if out_count > 0 {
            debug!(column = name, count = out_count, "nulling out-of-range values");
            nulled += out_count;
        }
        df.with_column(cleaned.into_series().with_name((*name).into()))?;
    }
    Ok(nulled)
}

/// Drops rows whose `pitch_type` is null; surviving rows keep their
/// relative order. Returns the filtered frame and the dropped-row count.
///
/// A batch without a `pitch_type` column has no typed rows at all, so the
/// result is empty.
pub fn drop_missing_pitch_type(df: &DataFrame) -> PolarsResult<(DataFrame, usize)> {
    let before = df.height();
    let Ok(column) = df.column("pitch_type") else {
        warn!(rows = before, "batch has no pitch_type column; dropping all rows");
        return Ok((df.head(Some(0)), before));
    };
    let mask = column.as_materialized_series().is_not_null();
    let filtered = df.filter(&mask)?;
    let dropped = before - filtered.height();
    if dropped > 0 {
        debug!(rows = dropped, "dropped rows with missing pitch_type");
    }
    Ok((filtered, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_plate_x_is_nulled_others_untouched() {
        let mut df = DataFrame::new(vec![
            Series::new("plate_x".into(), vec![Some(5.2), Some(-0.4), None]).into(),
            Series::new("plate_z".into(), vec![Some(2.1), Some(6.9), Some(0.0)]).into(),
            Series::new("release_speed".into(), vec![98.4, 88.0, 91.2]).into(),
        ])
        .unwrap();

        let nulled = null_out_of_range(&mut df).unwrap();

        assert_eq!(nulled, 1);
        let plate_x = df.column("plate_x").unwrap().f64().unwrap();
        assert_eq!(plate_x.get(0), None);
        assert_eq!(plate_x.get(1), Some(-0.4));
        assert_eq!(plate_x.get(2), None);
        let plate_z = df.column("plate_z").unwrap().f64().unwrap();
        assert_eq!(plate_z.get(0), Some(2.1));
        assert_eq!(plate_z.get(2), Some(0.0));
        // release_speed has no declared range and is left alone.
        let speed = df.column("release_speed").unwrap().f64().unwrap();
        assert_eq!(speed.get(0), Some(98.4));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut df = DataFrame::new(vec![
            Series::new("launch_speed".into(), vec![0.0, 130.0, 130.1, -0.1]).into(),
            Series::new("launch_angle".into(), vec![-90.0, 90.0, 90.5, -91.0]).into(),
        ])
        .unwrap();

        let nulled = null_out_of_range(&mut df).unwrap();

        assert_eq!(nulled, 4);
        let speed = df.column("launch_speed").unwrap().f64().unwrap();
        assert_eq!(speed.get(0), Some(0.0));
        assert_eq!(speed.get(1), Some(130.0));
        assert_eq!(speed.get(2), None);
        assert_eq!(speed.get(3), None);
        let angle = df.column("launch_angle").unwrap().f64().unwrap();
        assert_eq!(angle.get(0), Some(-90.0));
        assert_eq!(angle.get(1), Some(90.0));
        assert_eq!(angle.get(2), None);
        assert_eq!(angle.get(3), None);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let mut once = DataFrame::new(vec![
            Series::new("plate_x".into(), vec![Some(4.0), Some(1.0), None]).into(),
            Series::new("plate_z".into(), vec![Some(-1.0), Some(3.3), Some(8.2)]).into(),
        ])
        .unwrap();
        null_out_of_range(&mut once).unwrap();

        let mut twice = once.clone();
        let nulled_again = null_out_of_range(&mut twice).unwrap();

        assert_eq!(nulled_again, 0);
        assert!(once.equals_missing(&twice));
    }

    #[test]
    fn text_measurements_are_coerced_before_cleaning() {
        let mut df = DataFrame::new(vec![
            Series::new("launch_speed".into(), vec![Some("101.3"), Some("N/A"), Some("245.0")])
                .into(),
        ])
        .unwrap();

        null_out_of_range(&mut df).unwrap();

        let speed = df.column("launch_speed").unwrap().f64().unwrap();
        assert_eq!(speed.get(0), Some(101.3));
        assert_eq!(speed.get(1), None);
        assert_eq!(speed.get(2), None);
    }

    #[test]
    fn missing_columns_are_skipped() {
        let mut df = DataFrame::new(vec![
            Series::new("release_speed".into(), vec![95.0]).into(),
        ])
        .unwrap();
        let nulled = null_out_of_range(&mut df).unwrap();
        assert_eq!(nulled, 0);
    }

    #[test]
    fn rows_without_pitch_type_are_dropped_in_order() {
        let df = DataFrame::new(vec![
            Series::new("pitch_type".into(), vec![Some("FF"), None, Some("SL"), None]).into(),
            Series::new("pitch_number".into(), vec![1i64, 2, 3, 4]).into(),
        ])
        .unwrap();

        let (filtered, dropped) = drop_missing_pitch_type(&df).unwrap();

        assert_eq!(dropped, 2);
        assert_eq!(filtered.height(), 2);
        let kept = filtered.column("pitch_number").unwrap().i64().unwrap();
        assert_eq!(kept.get(0), Some(1));
        assert_eq!(kept.get(1), Some(3));
        let types = filtered.column("pitch_type").unwrap().str().unwrap();
        assert_eq!(types.null_count(), 0);
    }

    #[test]
    fn batch_without_pitch_type_column_empties_out() {
        let df = DataFrame::new(vec![
            Series::new("pitch_number".into(), vec![1i64, 2]).into(),
        ])
        .unwrap();
        let (filtered, dropped) = drop_missing_pitch_type(&df).unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(dropped, 2);
    }
}
