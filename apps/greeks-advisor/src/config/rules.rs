//! Recommendation rule configuration.

use serde::{Deserialize, Serialize};

use crate::domain::greek_analysis::{GreekThresholds, RecommendationRules};

use super::default_true;

/// Recommendation rule options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Include the rho factor (four-factor rule).
    #[serde(default = "default_true")]
    pub require_rho: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { require_rho: true }
    }
}

/// Build engine rules from configuration.
#[must_use]
pub const fn recommendation_rules(
    recommendation: &RecommendationConfig,
    thresholds: &GreekThresholds,
) -> RecommendationRules {
    RecommendationRules {
        thresholds: *thresholds,
        require_rho: recommendation.require_rho,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_four_factor_standard() {
        let rules =
            recommendation_rules(&RecommendationConfig::default(), &GreekThresholds::default());
        assert_eq!(rules, RecommendationRules::with_rho());
    }

    #[test]
    fn rules_carry_rho_flag() {
        let rules = recommendation_rules(
            &RecommendationConfig { require_rho: false },
            &GreekThresholds::STANDARD,
        );
        assert!(!rules.require_rho);
        assert_eq!(rules, RecommendationRules::without_rho());
    }
}
