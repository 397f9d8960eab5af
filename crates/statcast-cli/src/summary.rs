//! End-of-run staging summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use statcast_staging::StagingReport;

/// Prints the staging report, plus the loaded row count when the run
/// wrote to the warehouse.
pub fn print_staging_summary(report: &StagingReport, loaded: Option<usize>) {
    let loaded_value = match loaded {
        Some(count) => count.to_string(),
        None => "dry run".to_string(),
    };
    let rows: Vec<(&str, String)> = vec![
        ("Raw pitches in", report.rows_in.to_string()),
        (
            "Measurements nulled (out of range)",
            report.measurements_nulled.to_string(),
        ),
        (
            "Rows dropped (missing pitch type)",
            report.rows_missing_pitch_type.to_string(),
        ),
        (
            "Duplicate rows dropped",
            report.duplicate_rows_dropped.to_string(),
        ),
        ("Staged pitches out", report.rows_out.to_string()),
        ("Loaded into analytics.pitching", loaded_value),
    ];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Stage").add_attribute(Attribute::Bold),
        Cell::new("Rows").add_attribute(Attribute::Bold),
    ]);
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}
