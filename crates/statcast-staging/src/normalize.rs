//! Canonical type coercion.
//!
//! Every declared column is coerced to its canonical type when present in
//! the batch; unparseable values degrade to null, never to an error. The
//! normalizer matches columns by name against the catalog and leaves
//! undeclared or absent columns exactly as they were.

use polars::prelude::*;
use statcast_model::columns::{
    COUNT_COLUMNS, DATE_COLUMN, FLAG_COLUMNS, IDENTIFIER_COLUMNS, MEASUREMENT_COLUMNS,
    TEXT_COLUMNS,
};

/// Coerces all declared columns present in the batch.
pub fn normalize_types(df: &mut DataFrame) -> PolarsResult<()> {
    for name in IDENTIFIER_COLUMNS.iter().chain(COUNT_COLUMNS) {
        cast_integer_column(df, name)?;
    }
    for name in FLAG_COLUMNS {
        cast_column(df, name, &DataType::Boolean)?;
    }
    for name in TEXT_COLUMNS {
        cast_column(df, name, &DataType::String)?;
    }
    for name in MEASUREMENT_COLUMNS {
        cast_column(df, name, &DataType::Float64)?;
    }
    parse_game_date(df)?;
    Ok(())
}

/// Non-strict cast of one column; a column the cast cannot express at all
/// degrades to all-null rather than failing the batch.
fn cast_column(df: &mut DataFrame, name: &str, dtype: &DataType) -> PolarsResult<()> {
    let Ok(column) = df.column(name) else {
        return Ok(());
    };
    if column.dtype() == dtype {
        return Ok(());
    }
    let casted = column
        .cast(dtype)
        .unwrap_or_else(|_| Series::full_null(name.into(), df.height(), dtype).into_column());
    df.with_column(casted)?;
    Ok(())
}

/// Integer coercion routed through Float64 so identifier renderings like
/// `"545333.0"` (common in provider exports) survive with truncation.
fn cast_integer_column(df: &mut DataFrame, name: &str) -> PolarsResult<()> {
    let Ok(column) = df.column(name) else {
        return Ok(());
    };
    if column.dtype() == &DataType::Int64 {
        return Ok(());
    }
    let casted = column
        .cast(&DataType::Float64)
        .and_then(|c| c.cast(&DataType::Int64))
        .unwrap_or_else(|_| {
            Series::full_null(name.into(), df.height(), &DataType::Int64).into_column()
        });
    df.with_column(casted)?;
    Ok(())
}

/// Parses `game_date` into a Date column (`%Y-%m-%d`); unparseable values
/// become null. No-op when the column is absent or already a Date.
pub fn parse_game_date(df: &mut DataFrame) -> PolarsResult<()> {
    let Ok(column) = df.column(DATE_COLUMN) else {
        return Ok(());
    };
    if column.dtype() == &DataType::Date {
        return Ok(());
    }
    let options = StrptimeOptions {
        format: Some("%Y-%m-%d".into()),
        strict: false,
        ..Default::default()
    };
    let parsed = df
        .clone()
        .lazy()
        .with_column(col(DATE_COLUMN).cast(DataType::String).str().to_date(options))
        .collect()?;
    *df = parsed;
    Ok(())
}
