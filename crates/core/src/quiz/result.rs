use serde::{Deserialize, Serialize};

use super::progress::round_percent;

/// Lowest percent that lands in [`ResultTier::High`].
pub const HIGH_TIER_MIN_PERCENT: u8 = 80;
/// Lowest percent that lands in [`ResultTier::Mid`].
pub const MID_TIER_MIN_PERCENT: u8 = 50;

/// Display band for a final score. Boundaries belong to the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    High,
    Mid,
    Low,
}

impl ResultTier {
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        if percent >= HIGH_TIER_MIN_PERCENT {
            Self::High
        } else if percent >= MID_TIER_MIN_PERCENT {
            Self::Mid
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
        }
    }
}

/// Final outcome of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percent: u8,
}

impl QuizResult {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score,
            total,
            percent: round_percent(score, total),
        }
    }

    #[must_use]
    pub fn tier(&self) -> ResultTier {
        ResultTier::from_percent(self.percent)
    }
}
