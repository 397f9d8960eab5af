//! Polars `AnyValue` helpers shared by the staging and load crates.

use polars::prelude::{AnyValue, DataFrame};

/// Renders a cell value as a plain string: empty for null, no trailing
/// zeros on floats, `true`/`false` for booleans. Used for composite dedup
/// keys and diagnostics, where the rendering only needs to be stable.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// String value of a named column at a row index; empty when the column is
/// absent or the cell is null.
pub fn column_value_string(df: &DataFrame, name: &str, idx: usize) -> String {
    match df.column(name) {
        Ok(column) => any_to_string(column.get(idx).unwrap_or(AnyValue::Null)),
        Err(_) => String::new(),
    }
}

/// Formats a float without trailing zeros (`1.50` -> `1.5`, `1.0` -> `1`).
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;

    #[test]
    fn null_renders_empty() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn integers_and_floats_render_plainly() {
        assert_eq!(any_to_string(AnyValue::Int64(545333)), "545333");
        assert_eq!(any_to_string(AnyValue::Float64(92.5)), "92.5");
        assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
    }

    #[test]
    fn booleans_render_lowercase() {
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
        assert_eq!(any_to_string(AnyValue::Boolean(false)), "false");
    }

    #[test]
    fn format_numeric_strips_trailing_zeros() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn column_value_string_handles_missing_column_and_null_cell() {
        let df = DataFrame::new(vec![
            Series::new("game_pk".into(), vec![Some(100i64), None]).into(),
        ])
        .unwrap();
        assert_eq!(column_value_string(&df, "game_pk", 0), "100");
        assert_eq!(column_value_string(&df, "game_pk", 1), "");
        assert_eq!(column_value_string(&df, "absent", 0), "");
    }
}
