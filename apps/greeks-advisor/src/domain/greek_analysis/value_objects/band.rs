//! Risk Band Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier qualitative risk classification for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Band {
    /// Value meets the favorable threshold.
    Favorable,
    /// Value sits in the window just short of favorable.
    Marginal,
    /// Anything else.
    Unfavorable,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorable => write!(f, "FAVORABLE"),
            Self::Marginal => write!(f, "MARGINAL"),
            Self::Unfavorable => write!(f, "UNFAVORABLE"),
        }
    }
}
