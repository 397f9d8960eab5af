//! Pitch outcome classification.
//!
//! Statcast reports the result of every pitch as a free-text code in the
//! `description` field (`swinging_strike`, `hit_into_play`, ...). This
//! module maps that code onto a closed set of semantic categories and four
//! independent boolean flags.
//!
//! The category mapping is an ordered rule table evaluated top to bottom;
//! the first rule whose code set contains the (lowercased) input wins. The
//! flags are computed from the raw code against their own code sets, NOT
//! derived from the category, so adding a category later cannot silently
//! change a flag.

/// Outcome codes counted as a swing-and-miss.
pub const WHIFF_CODES: &[&str] = &["swinging_strike", "swinging_strike_blocked", "foul_tip"];

/// Outcome codes counted as a called strike.
pub const CALLED_STRIKE_CODES: &[&str] = &["called_strike"];

/// Outcome codes counted as a ball.
pub const BALL_CODES: &[&str] = &["ball", "blocked_ball", "automatic_ball"];

/// Outcome codes counted as a ball in play.
pub const BIP_CODES: &[&str] = &["hit_into_play"];

/// Outcome codes counted as a bunt strike.
pub const BUNT_STRIKE_CODES: &[&str] = &["bunt_foul_tip", "foul_bunt", "missed_bunt"];

/// Semantic category of a single pitch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchResult {
    Whiff,
    CalledStrike,
    AutomaticStrike,
    Ball,
    InPlay,
    Foul,
    HitByPitch,
    BuntStrike,
    Other,
    Unknown,
}

impl PitchResult {
    /// Warehouse string for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whiff => "whiff",
            Self::CalledStrike => "called_strike",
            Self::AutomaticStrike => "automatic_strike",
            Self::Ball => "ball",
            Self::InPlay => "in_play",
            Self::Foul => "foul",
            Self::HitByPitch => "hit_by_pitch",
            Self::BuntStrike => "bunt_strike",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

/// Ordered classification rules: first matching code set wins.
///
/// The order is load-bearing. Codes must not appear in more than one set,
/// but if a code ever did, the earlier rule would take it.
const RESULT_RULES: &[(&[&str], PitchResult)] = &[
    (WHIFF_CODES, PitchResult::Whiff),
    (CALLED_STRIKE_CODES, PitchResult::CalledStrike),
    (&["automatic_strike"], PitchResult::AutomaticStrike),
    (BALL_CODES, PitchResult::Ball),
    (BIP_CODES, PitchResult::InPlay),
    (&["foul"], PitchResult::Foul),
    (&["hit_by_pitch"], PitchResult::HitByPitch),
    (BUNT_STRIKE_CODES, PitchResult::BuntStrike),
];

/// Classify a raw outcome code.
///
/// Matching is case-insensitive and exact. A missing code is `Unknown`;
/// a code outside every rule set is `Other`.
pub fn map_pitch_result(description: Option<&str>) -> PitchResult {
    let Some(raw) = description else {
        return PitchResult::Unknown;
    };
    let code = raw.trim().to_ascii_lowercase();
    RESULT_RULES
        .iter()
        .find(|(codes, _)| codes.contains(&code.as_str()))
        .map_or(PitchResult::Other, |(_, result)| *result)
}

fn in_code_set(description: Option<&str>, codes: &[&str]) -> bool {
    description.is_some_and(|raw| codes.contains(&raw.trim().to_ascii_lowercase().as_str()))
}

/// The batter hit the pitch into play.
pub fn is_bip(description: Option<&str>) -> bool {
    in_code_set(description, BIP_CODES)
}

/// The batter swung and missed.
pub fn is_whiff(description: Option<&str>) -> bool {
    in_code_set(description, WHIFF_CODES)
}

/// The pitch was taken for a called strike.
pub fn is_called_strike(description: Option<&str>) -> bool {
    in_code_set(description, CALLED_STRIKE_CODES)
}

/// The pitch was a ball.
pub fn is_ball(description: Option<&str>) -> bool {
    in_code_set(description, BALL_CODES)
}
