//! Declared column catalog for the pitch-level dataset.
//!
//! The staging pipeline and the warehouse loader match these lists against
//! whatever columns a batch actually carries; a declared column that is
//! absent from a batch is simply skipped. Names follow the provider's
//! statcast export.

/// Identifier columns: MLBAM keys for games, players, and baserunners.
/// Coerced to nullable 64-bit integers.
pub const IDENTIFIER_COLUMNS: &[&str] = &[
    "game_pk", "pitcher_id", "batter_id", "pitcher", "batter", "on_1b", "on_2b", "on_3b",
];

/// Small count/context columns, also nullable 64-bit integers.
pub const COUNT_COLUMNS: &[&str] = &[
    "pitch_number",
    "at_bat_number",
    "zone",
    "balls",
    "strikes",
    "inning",
    "outs_when_up",
    "home_score",
    "away_score",
    "bat_score",
    "fld_score",
    "home_score_diff",
    "bat_score_diff",
    "hit_location",
];

/// Boolean flag columns (tri-state: true/false/null).
pub const FLAG_COLUMNS: &[&str] = &[
    "is_whiff",
    "is_bip",
    "is_called_strike",
    "is_ball",
    "is_strikeout",
    "is_walk",
];

/// Categorical/text columns.
pub const TEXT_COLUMNS: &[&str] = &[
    "pitch_type",
    "pitch_name",
    "events",
    "description",
    "pitch_result_type",
    "p_throws",
    "stand",
    "if_fielding_alignment",
    "of_fielding_alignment",
    "bb_type",
];

/// Physical measurement columns, nullable 64-bit floats.
pub const MEASUREMENT_COLUMNS: &[&str] = &[
    "release_speed",
    "release_pos_x",
    "release_pos_y",
    "release_pos_z",
    "release_spin_rate",
    "release_extension",
    "spin_axis",
    "effective_speed",
    "pfx_x",
    "pfx_z",
    "vx0",
    "vy0",
    "vz0",
    "ax",
    "ay",
    "az",
    "plate_x",
    "plate_z",
    "sz_top",
    "sz_bot",
    "api_break_z_with_gravity",
    "api_break_x_arm",
    "api_break_x_batter_in",
    "arm_angle",
    "attack_angle",
    "attack_direction",
    "swing_path_tilt",
    "launch_speed",
    "launch_angle",
];

/// Date column, parsed as `%Y-%m-%d`.
pub const DATE_COLUMN: &str = "game_date";

/// Plausible physical ranges, closed on both ends. Values strictly outside
/// are nulled by the field cleaner; nothing is ever clamped.
///
/// - `plate_x`: feet from the center of home plate
/// - `plate_z`: feet above the ground at the plate
/// - `launch_speed`: exit velocity in mph
/// - `launch_angle`: degrees from horizontal
pub const MEASUREMENT_RANGES: &[(&str, f64, f64)] = &[
    ("plate_x", -3.0, 3.0),
    ("plate_z", 0.0, 7.0),
    ("launch_speed", 0.0, 130.0),
    ("launch_angle", -90.0, 90.0),
];

/// Natural composite primary key of a pitch event.
///
/// `game_date` is deliberately not part of the key: a corrected re-report
/// of the same pitch may carry a different date, and those must collide so
/// the dedup tie-break can pick the later one.
pub const PRIMARY_KEY: &[&str] = &["game_pk", "at_bat_number", "pitch_number"];

/// Tie-break sort order for duplicate resolution, ascending; the last row
/// of each duplicate group in this order wins.
pub const DEDUPE_SORT_ORDER: &[&str] = &["game_pk", "at_bat_number", "pitch_number", "game_date"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranged_columns_are_declared_measurements() {
        for (name, _, _) in MEASUREMENT_RANGES {
            assert!(
                MEASUREMENT_COLUMNS.contains(name),
                "{name} has a range but no measurement declaration"
            );
        }
    }

    #[test]
    fn ranges_are_well_formed() {
        for (name, lo, hi) in MEASUREMENT_RANGES {
            assert!(lo < hi, "{name} range is inverted");
        }
    }

    #[test]
    fn primary_key_prefixes_the_sort_order() {
        assert_eq!(&DEDUPE_SORT_ORDER[..PRIMARY_KEY.len()], PRIMARY_KEY);
    }

    #[test]
    fn no_column_is_declared_in_two_type_classes() {
        let classes: [&[&str]; 5] = [
            IDENTIFIER_COLUMNS,
            COUNT_COLUMNS,
            FLAG_COLUMNS,
            TEXT_COLUMNS,
            MEASUREMENT_COLUMNS,
        ];
        let mut seen = std::collections::HashSet::new();
        for class in classes {
            for name in class {
                assert!(seen.insert(*name), "column {name} declared twice");
            }
        }
        assert!(!seen.contains(DATE_COLUMN));
    }
}
