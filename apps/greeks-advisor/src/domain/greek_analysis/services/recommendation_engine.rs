//! Recommendation Engine
//!
//! Maps a snapshot and an option type to a buy/avoid verdict. Every rule
//! factor must hold for a favorable verdict. Missing metrics are compared
//! as `0.0`.
//!
//! | Type | Favorable when |
//! |------|----------------|
//! | Call | delta > 0.3, theta > -0.5, vega > 0.2, rho > 0.1 |
//! | Put  | delta < -0.3, theta > -0.5, vega > 0.2, rho < -0.1 |
//!
//! The rho factor can be switched off, giving the three-factor rule.

use serde::{Deserialize, Serialize};

use crate::domain::greek_analysis::value_objects::{
    Comparison, FactorCheck, GreekSnapshot, GreekThresholds, MetricName, OptionType,
    Recommendation, Verdict,
};

/// Rule configuration for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRules {
    /// Threshold table.
    pub thresholds: GreekThresholds,
    /// Include the rho factor.
    pub require_rho: bool,
}

impl RecommendationRules {
    /// Four-factor rule (delta, theta, vega, rho).
    #[must_use]
    pub const fn with_rho() -> Self {
        Self {
            thresholds: GreekThresholds::STANDARD,
            require_rho: true,
        }
    }

    /// Three-factor rule (delta, theta, vega).
    #[must_use]
    pub const fn without_rho() -> Self {
        Self {
            thresholds: GreekThresholds::STANDARD,
            require_rho: false,
        }
    }

    /// Favorable threshold and comparison for one metric, if it takes part
    /// in the rule for this option type.
    #[must_use]
    pub fn factor_rule(
        &self,
        metric: MetricName,
        option_type: OptionType,
    ) -> Option<(Comparison, f64)> {
        let t = &self.thresholds;
        match (metric, option_type) {
            (_, OptionType::Unknown) => None,
            (MetricName::Delta, OptionType::Call) => Some((Comparison::Above, t.delta)),
            (MetricName::Delta, OptionType::Put) => Some((Comparison::Below, -t.delta)),
            (MetricName::Theta, _) => Some((Comparison::Above, t.theta)),
            (MetricName::Vega, _) => Some((Comparison::Above, t.vega)),
            (MetricName::Rho, _) if !self.require_rho => None,
            (MetricName::Rho, OptionType::Call) => Some((Comparison::Above, t.rho)),
            (MetricName::Rho, OptionType::Put) => Some((Comparison::Below, -t.rho)),
            (MetricName::Gamma | MetricName::ImpVol, _) => None,
        }
    }
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self::with_rho()
    }
}

/// Stateless recommendation service.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    rules: RecommendationRules,
}

impl RecommendationEngine {
    /// Factors in evaluation order.
    const FACTOR_ORDER: [MetricName; 4] = [
        MetricName::Delta,
        MetricName::Theta,
        MetricName::Vega,
        MetricName::Rho,
    ];

    /// Create an engine with the given rules.
    #[must_use]
    pub const fn new(rules: RecommendationRules) -> Self {
        Self { rules }
    }

    /// Get the rules.
    #[must_use]
    pub const fn rules(&self) -> &RecommendationRules {
        &self.rules
    }

    /// Evaluate a snapshot for one option type.
    #[must_use]
    pub fn recommend(&self, snapshot: &GreekSnapshot, option_type: OptionType) -> Recommendation {
        if !option_type.is_known() {
            return Recommendation::type_not_recognized();
        }

        let factors: Vec<FactorCheck> = Self::FACTOR_ORDER
            .into_iter()
            .filter_map(|metric| {
                let (comparison, threshold) = self.rules.factor_rule(metric, option_type)?;
                let observed = snapshot.value_or_zero(metric);
                Some(FactorCheck {
                    metric,
                    observed,
                    threshold,
                    comparison,
                    passed: comparison.holds(observed, threshold),
                    imputed: snapshot.get(metric).is_none(),
                })
            })
            .collect();

        let verdict = if factors.iter().all(|f| f.passed) {
            Verdict::ConsiderBuying
        } else {
            Verdict::Avoid
        };

        Recommendation {
            option_type,
            verdict,
            factors,
        }
    }
}
