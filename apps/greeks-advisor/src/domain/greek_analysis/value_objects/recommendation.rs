//! Recommendation value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{MetricName, OptionType};

/// Message returned when the option type could not be determined.
pub const TYPE_NOT_RECOGNIZED_MESSAGE: &str =
    "Option type not recognized. Please specify Call or Put.";

const CALL_BUY_MESSAGE: &str = "Yes, consider buying this call option. Positive Delta, \
     manageable Theta decay, and good Vega suggest potential profit.";

const PUT_BUY_MESSAGE: &str = "Yes, consider buying this put option. Negative Delta, \
     manageable Theta decay, and good Vega suggest potential profit.";

const AVOID_MESSAGE: &str =
    "No, avoid buying this option. The Greek values suggest high risk or low profitability.";

/// Outcome of evaluating a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Every factor held.
    ConsiderBuying,
    /// At least one factor failed.
    Avoid,
    /// Option type unknown; no evaluation performed.
    TypeNotRecognized,
}

impl Verdict {
    /// Lowercase label used in metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConsiderBuying => "consider_buying",
            Self::Avoid => "avoid",
            Self::TypeNotRecognized => "type_not_recognized",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Comparison {
    /// Value must be strictly greater than the threshold.
    Above,
    /// Value must be strictly less than the threshold.
    Below,
}

impl Comparison {
    /// Apply the comparison.
    #[must_use]
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Above => value > threshold,
            Self::Below => value < threshold,
        }
    }

    const fn symbol(&self) -> &'static str {
        match self {
            Self::Above => ">",
            Self::Below => "<",
        }
    }
}

/// A single evaluated factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorCheck {
    /// Metric evaluated.
    pub metric: MetricName,
    /// Value compared (zero when the metric was missing).
    pub observed: f64,
    /// Threshold compared against.
    pub threshold: f64,
    /// Comparison direction.
    pub comparison: Comparison,
    /// Whether the factor held.
    pub passed: bool,
    /// True when `observed` was zero-filled because the metric was absent.
    pub imputed: bool,
}

impl fmt::Display for FactorCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({})",
            self.metric,
            self.observed,
            self.comparison.symbol(),
            self.threshold,
            if self.passed { "ok" } else { "failed" }
        )?;
        if self.imputed {
            write!(f, " [missing, treated as 0]")?;
        }
        Ok(())
    }
}

/// Recommendation for one (snapshot, option type) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Option type evaluated.
    pub option_type: OptionType,
    /// Decision.
    pub verdict: Verdict,
    /// Evaluated factors (empty for an unrecognized type).
    pub factors: Vec<FactorCheck>,
}

impl Recommendation {
    /// Sentinel recommendation for an unknown option type.
    #[must_use]
    pub const fn type_not_recognized() -> Self {
        Self {
            option_type: OptionType::Unknown,
            verdict: Verdict::TypeNotRecognized,
            factors: Vec::new(),
        }
    }

    /// True when the verdict is to consider buying.
    #[must_use]
    pub fn is_favorable(&self) -> bool {
        self.verdict == Verdict::ConsiderBuying
    }

    /// Factors that failed.
    pub fn failed_factors(&self) -> impl Iterator<Item = &FactorCheck> {
        self.factors.iter().filter(|f| !f.passed)
    }

    /// Human-readable justification.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match (self.verdict, self.option_type) {
            (Verdict::TypeNotRecognized, _) | (_, OptionType::Unknown) => {
                TYPE_NOT_RECOGNIZED_MESSAGE
            }
            (Verdict::ConsiderBuying, OptionType::Call) => CALL_BUY_MESSAGE,
            (Verdict::ConsiderBuying, OptionType::Put) => PUT_BUY_MESSAGE,
            (Verdict::Avoid, _) => AVOID_MESSAGE,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(passed: bool) -> FactorCheck {
        FactorCheck {
            metric: MetricName::Delta,
            observed: 0.25,
            threshold: 0.3,
            comparison: Comparison::Above,
            passed,
            imputed: false,
        }
    }

    #[test]
    fn comparison_is_strict() {
        assert!(Comparison::Above.holds(0.31, 0.3));
        assert!(!Comparison::Above.holds(0.3, 0.3));
        assert!(Comparison::Below.holds(-0.31, -0.3));
        assert!(!Comparison::Below.holds(-0.3, -0.3));
    }

    #[test]
    fn sentinel_message() {
        let r = Recommendation::type_not_recognized();
        assert_eq!(r.message(), TYPE_NOT_RECOGNIZED_MESSAGE);
        assert!(!r.is_favorable());
        assert!(r.factors.is_empty());
    }

    #[test]
    fn messages_follow_verdict_and_type() {
        let call = Recommendation {
            option_type: OptionType::Call,
            verdict: Verdict::ConsiderBuying,
            factors: vec![factor(true)],
        };
        assert!(call.message().starts_with("Yes, consider buying this call"));

        let put = Recommendation {
            option_type: OptionType::Put,
            ..call.clone()
        };
        assert!(put.message().contains("Negative Delta"));

        let avoid = Recommendation {
            verdict: Verdict::Avoid,
            factors: vec![factor(false)],
            ..call
        };
        assert!(avoid.message().starts_with("No, avoid"));
        assert_eq!(avoid.failed_factors().count(), 1);
    }

    #[test]
    fn factor_display_marks_imputed_values() {
        let f = FactorCheck {
            imputed: true,
            observed: 0.0,
            ..factor(false)
        };
        let text = f.to_string();
        assert!(text.contains("delta 0 > 0.3"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(Verdict::ConsiderBuying.as_str(), "consider_buying");
        assert_eq!(Verdict::Avoid.to_string(), "avoid");
        let json = serde_json::to_string(&Verdict::TypeNotRecognized).unwrap();
        assert_eq!(json, "\"TYPE_NOT_RECOGNIZED\"");
    }
}
