pub mod polars;

pub use crate::polars::{any_to_string, column_value_string, format_numeric};
