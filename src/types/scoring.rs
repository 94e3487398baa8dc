pub type Score = f64;

/// Full sweep of the gauge; the fill segments always sum to this.
pub const FULL_SCALE: Score = 100.0;

/// Inclusive lower bound of the Medium tier.
pub const MEDIUM_FLOOR: Score = 40.0;
/// Inclusive lower bound of the Good tier.
pub const GOOD_FLOOR: Score = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Poor,
    Medium,
    Good,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Medium => "medium",
            Self::Good => "good",
        }
    }
}

/// Maps a score to its display tier. Thresholds are inclusive on the
/// lower bound: 40 is Medium, 70 is Good. Scores outside [0, 100] are
/// accepted and fall into whichever tier the comparisons select.
pub fn tier_for(score: Score) -> Tier {
    if score >= GOOD_FLOOR {
        Tier::Good
    } else if score >= MEDIUM_FLOOR {
        Tier::Medium
    } else {
        Tier::Poor
    }
}
