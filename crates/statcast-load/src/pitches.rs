//! Bulk insert of a staged pitch frame into the fact table.

use chrono::NaiveDate;
use polars::prelude::*;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{info, warn};

use crate::error::Result;
use crate::schema::fact_columns;

/// PostgreSQL caps bind parameters per statement at 65535; rows are
/// chunked so `columns * rows` stays safely below that.
const MAX_BINDS_PER_INSERT: usize = 60_000;

/// Typed accessor for one frame column, resolved once per load so every
/// NULL is bound with its column's type.
enum ColumnValues<'a> {
    Int(&'a Int64Chunked),
    Float(&'a Float64Chunked),
    Bool(&'a BooleanChunked),
    Str(&'a StringChunked),
    Date(&'a DateChunked),
}

impl ColumnValues<'_> {
    fn bind(&self, idx: usize, b: &mut sqlx::query_builder::Separated<'_, '_, Postgres, &str>) {
        match self {
            Self::Int(ca) => {
                b.push_bind(ca.get(idx));
            }
            Self::Float(ca) => {
                b.push_bind(ca.get(idx));
            }
            Self::Bool(ca) => {
                b.push_bind(ca.get(idx));
            }
            Self::Str(ca) => {
                b.push_bind(ca.get(idx).map(str::to_string));
            }
            Self::Date(ca) => {
                b.push_bind(ca.phys.get(idx).and_then(days_to_date));
            }
        }
    }
}

fn days_to_date(days_since_epoch: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days_since_epoch + 719_163)
}

/// Bulk-inserts the staged frame into `analytics.pitching`.
///
/// Only declared fact columns present in the frame are written; frame
/// columns outside the catalog are skipped with a warning. Returns the
/// number of rows inserted.
pub async fn load_pitches(pool: &PgPool, frame: &DataFrame) -> Result<usize> {
    let height = frame.height();
    if height == 0 {
        info!("staged frame is empty; nothing to load");
        return Ok(0);
    }

    let declared: Vec<&str> = fact_columns().iter().map(|(name, _)| *name).collect();
    let mut names: Vec<&str> = Vec::new();
    let mut accessors: Vec<ColumnValues<'_>> = Vec::new();
    for column in frame.get_columns() {
        let name = column.name().as_str();
        let Some(declared_name) = declared.iter().copied().find(|n| *n == name) else {
            warn!(column = name, "frame column not in fact table; skipping");
            continue;
        };
        let accessor = match column.dtype() {
            DataType::Int64 => ColumnValues::Int(column.i64()?),
            DataType::Float64 => ColumnValues::Float(column.f64()?),
            DataType::Boolean => ColumnValues::Bool(column.bool()?),
            DataType::String => ColumnValues::Str(column.str()?),
            DataType::Date => ColumnValues::Date(column.date()?),
            other => {
                warn!(column = name, dtype = %other, "unsupported dtype; skipping column");
                continue;
            }
        };
        names.push(declared_name);
        accessors.push(accessor);
    }
    if names.is_empty() {
        warn!("no declared fact columns in staged frame; nothing to load");
        return Ok(0);
    }

    let rows_per_insert = (MAX_BINDS_PER_INSERT / names.len()).max(1);
    let insert_head = format!("INSERT INTO analytics.pitching ({}) ", names.join(", "));

    let mut start = 0usize;
    while start < height {
        let end = (start + rows_per_insert).min(height);
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(insert_head.as_str());
        builder.push_values(start..end, |mut b, idx| {
            for accessor in &accessors {
                accessor.bind(idx, &mut b);
            }
        });
        builder.build().execute(pool).await?;
        start = end;
    }

    info!(rows = height, columns = names.len(), "loaded staged pitches");
    Ok(height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_days_convert_to_dates() {
        assert_eq!(days_to_date(0), NaiveDate::from_ymd_opt(1970, 1, 1));
        assert_eq!(days_to_date(20_181), NaiveDate::from_ymd_opt(2025, 4, 3));
        assert_eq!(days_to_date(-1), NaiveDate::from_ymd_opt(1969, 12, 31));
    }
}
