//! Option Type Value Object

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Option type declared for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
    /// No call/put declaration was found.
    #[default]
    Unknown,
}

impl OptionType {
    /// Both contract directions, in evaluation order.
    pub const DIRECTIONAL: [Self; 2] = [Self::Call, Self::Put];

    /// Check if the type was recognized.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Lowercase label used in metrics and messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A label that is neither call nor put.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown option type: {0}")]
pub struct UnknownOptionType(pub String);

impl FromStr for OptionType {
    type Err = UnknownOptionType;

    /// Parse a user-supplied direction; only call and put are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            _ => Err(UnknownOptionType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(OptionType::default(), OptionType::Unknown);
        assert!(!OptionType::default().is_known());
    }

    #[test]
    fn only_directions_are_known() {
        assert!(OptionType::Call.is_known());
        assert!(OptionType::Put.is_known());
        assert!(!OptionType::Unknown.is_known());
    }

    #[test]
    fn display_and_label() {
        assert_eq!(OptionType::Call.to_string(), "CALL");
        assert_eq!(OptionType::Put.as_str(), "put");
        assert_eq!(OptionType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn serde_roundtrip_uses_screaming_case() {
        let json = serde_json::to_string(&OptionType::Put).unwrap();
        assert_eq!(json, "\"PUT\"");
        let parsed: OptionType = serde_json::from_str("\"CALL\"").unwrap();
        assert_eq!(parsed, OptionType::Call);
    }

    #[test]
    fn parses_directions_case_insensitively() {
        assert_eq!("Call".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" PUT ".parse::<OptionType>(), Ok(OptionType::Put));
        assert!("unknown".parse::<OptionType>().is_err());
        assert!("straddle".parse::<OptionType>().is_err());
    }
}
