use serde::{Deserialize, Serialize};

/// Presentation band for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Great,
    Good,
    TryAgain,
}

impl ScoreBand {
    /// Bands are inclusive: 5 excellent, 4 great, 3 good, anything lower try again.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            5.. => Self::Excellent,
            4 => Self::Great,
            3 => Self::Good,
            _ => Self::TryAgain,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Great => "great",
            Self::Good => "good",
            Self::TryAgain => "try again",
        }
    }
}
