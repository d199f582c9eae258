//! Metric Name Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six tracked option risk metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricName {
    /// Delta - directional exposure.
    Delta,
    /// Gamma - rate of change of delta.
    Gamma,
    /// Rho - sensitivity to interest rates.
    Rho,
    /// Theta - time decay per day.
    Theta,
    /// Vega - sensitivity to volatility.
    Vega,
    /// Implied volatility.
    #[serde(rename = "impvol")]
    ImpVol,
}

impl MetricName {
    /// All metrics, in keyword-scan order.
    pub const ALL: [Self; 6] = [
        Self::Delta,
        Self::Gamma,
        Self::Rho,
        Self::Theta,
        Self::Vega,
        Self::ImpVol,
    ];

    /// Metrics shown in the banded summary table.
    pub const DISPLAYED: [Self; 5] = [
        Self::Delta,
        Self::Theta,
        Self::Vega,
        Self::Rho,
        Self::ImpVol,
    ];

    /// Canonical lowercase keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delta => "delta",
            Self::Gamma => "gamma",
            Self::Rho => "rho",
            Self::Theta => "theta",
            Self::Vega => "vega",
            Self::ImpVol => "impvol",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token does not name a tracked metric.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric name: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for MetricName {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or(UnknownMetric(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("delta", MetricName::Delta)]
    #[test_case("Gamma", MetricName::Gamma)]
    #[test_case("RHO", MetricName::Rho)]
    #[test_case("tHeTa", MetricName::Theta)]
    #[test_case("Vega", MetricName::Vega)]
    #[test_case("ImpVol", MetricName::ImpVol)]
    fn parses_case_insensitively(input: &str, expected: MetricName) {
        assert_eq!(input.parse::<MetricName>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "strike".parse::<MetricName>().unwrap_err();
        assert!(err.to_string().contains("strike"));
        assert!("".parse::<MetricName>().is_err());
    }

    #[test]
    fn scan_order_is_fixed() {
        let names: Vec<&str> = MetricName::ALL.iter().map(MetricName::as_str).collect();
        assert_eq!(names, ["delta", "gamma", "rho", "theta", "vega", "impvol"]);
    }

    #[test]
    fn displayed_metrics_exclude_gamma() {
        assert!(!MetricName::DISPLAYED.contains(&MetricName::Gamma));
        assert_eq!(MetricName::DISPLAYED.len(), 5);
    }

    #[test]
    fn serde_uses_canonical_keyword() {
        let json = serde_json::to_string(&MetricName::ImpVol).unwrap();
        assert_eq!(json, "\"impvol\"");
        let parsed: MetricName = serde_json::from_str("\"theta\"").unwrap();
        assert_eq!(parsed, MetricName::Theta);
    }
}
