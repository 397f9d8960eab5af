//! Derived outcome fields.

use polars::prelude::*;
use statcast_model::outcome;

/// Appends the five derived outcome columns to a pitch batch:
/// `pitch_result_type` plus the `is_bip` / `is_whiff` / `is_called_strike`
/// / `is_ball` flags, all computed from the raw `description` code.
///
/// A batch without a `description` column classifies every row as
/// `unknown` with all flags false. Returns the number of rows classified.
pub fn add_derived_fields(df: &mut DataFrame) -> PolarsResult<usize> {
    let height = df.height();

    let mut result_type: Vec<&'static str> = Vec::with_capacity(height);
    let mut bip: Vec<bool> = Vec::with_capacity(height);
    let mut whiff: Vec<bool> = Vec::with_capacity(height);
    let mut called_strike: Vec<bool> = Vec::with_capacity(height);
    let mut ball: Vec<bool> = Vec::with_capacity(height);

    {
        let mut classify = |code: Option<&str>| {
            result_type.push(outcome::map_pitch_result(code).as_str());
            bip.push(outcome::is_bip(code));
            whiff.push(outcome::is_whiff(code));
            called_strike.push(outcome::is_called_strike(code));
            ball.push(outcome::is_ball(code));
        };
        match df.column("description") {
            Ok(column) => {
                let codes = column.cast(&DataType::String)?;
                for code in codes.str()?.into_iter() {
                    classify(code);
                }
            }
            Err(_) => {
                for _ in 0..height {
                    classify(None);
                }
            }
        }
    }

    df.with_column(Column::new("pitch_result_type".into(), result_type))?;
    df.with_column(Column::new("is_bip".into(), bip))?;
    df.with_column(Column::new("is_whiff".into(), whiff))?;
    df.with_column(Column::new("is_called_strike".into(), called_strike))?;
    df.with_column(Column::new("is_ball".into(), ball))?;

    Ok(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(descriptions: Vec<Option<&str>>) -> DataFrame {
        DataFrame::new(vec![
            Series::new("description".into(), descriptions).into(),
        ])
        .unwrap()
    }

    #[test]
    fn foul_tip_is_a_whiff_with_independent_flags() {
        let mut df = batch(vec![Some("foul_tip")]);
        add_derived_fields(&mut df).unwrap();

        let result = df.column("pitch_result_type").unwrap().str().unwrap();
        assert_eq!(result.get(0), Some("whiff"));
        assert_eq!(df.column("is_whiff").unwrap().bool().unwrap().get(0), Some(true));
        assert_eq!(df.column("is_bip").unwrap().bool().unwrap().get(0), Some(false));
        assert_eq!(df.column("is_ball").unwrap().bool().unwrap().get(0), Some(false));
        assert_eq!(
            df.column("is_called_strike").unwrap().bool().unwrap().get(0),
            Some(false)
        );
    }

    #[test]
    fn null_description_is_unknown() {
        let mut df = batch(vec![None, Some("hit_into_play")]);
        add_derived_fields(&mut df).unwrap();

        let result = df.column("pitch_result_type").unwrap().str().unwrap();
        assert_eq!(result.get(0), Some("unknown"));
        assert_eq!(result.get(1), Some("in_play"));
        assert_eq!(df.column("is_bip").unwrap().bool().unwrap().get(0), Some(false));
        assert_eq!(df.column("is_bip").unwrap().bool().unwrap().get(1), Some(true));
    }

    #[test]
    fn unlisted_code_is_other_with_no_flags() {
        let mut df = batch(vec![Some("pitchout")]);
        add_derived_fields(&mut df).unwrap();

        let result = df.column("pitch_result_type").unwrap().str().unwrap();
        assert_eq!(result.get(0), Some("other"));
        for flag in ["is_bip", "is_whiff", "is_called_strike", "is_ball"] {
            assert_eq!(df.column(flag).unwrap().bool().unwrap().get(0), Some(false));
        }
    }

    #[test]
    fn batch_without_description_classifies_unknown() {
        let mut df = DataFrame::new(vec![
            Series::new("pitch_type".into(), vec!["FF", "SL"]).into(),
        ])
        .unwrap();
        let classified = add_derived_fields(&mut df).unwrap();

        assert_eq!(classified, 2);
        let result = df.column("pitch_result_type").unwrap().str().unwrap();
        assert_eq!(result.get(0), Some("unknown"));
        assert_eq!(result.get(1), Some("unknown"));
    }
}
