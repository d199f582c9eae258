//! Threshold table shared by the recommendation engine and band classifier.
//!
//! Directional bounds (delta, rho) are stored as magnitudes for a call;
//! put bounds are their mirror image. Theta, vega and implied volatility
//! are direction-independent.

use serde::{Deserialize, Serialize};

/// Favorable bounds and marginal window edges per metric.
///
/// Missing fields take the [`GreekThresholds::STANDARD`] value when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreekThresholds {
    /// Call delta must exceed this; put delta must be below its negation.
    pub delta: f64,
    /// Theta must exceed this (both types).
    pub theta: f64,
    /// Vega must exceed this (both types).
    pub vega: f64,
    /// Call rho must exceed this; put rho must be below its negation.
    pub rho: f64,
    /// Lowest marginal call delta; put delta is marginal up to its negation.
    pub delta_marginal_floor: f64,
    /// Lowest marginal theta.
    pub theta_marginal_floor: f64,
    /// Lowest marginal vega.
    pub vega_marginal_floor: f64,
    /// Lowest marginal call rho; put rho is marginal up to its negation.
    pub rho_marginal_floor: f64,
    /// Implied volatility strictly below this is favorable.
    pub impvol_favorable_below: f64,
    /// Implied volatility up to and including this is marginal.
    pub impvol_marginal_up_to: f64,
}

impl GreekThresholds {
    /// Standard threshold table.
    pub const STANDARD: Self = Self {
        delta: 0.3,
        theta: -0.5,
        vega: 0.2,
        rho: 0.1,
        delta_marginal_floor: 0.2,
        theta_marginal_floor: -0.7,
        vega_marginal_floor: 0.1,
        rho_marginal_floor: 0.05,
        impvol_favorable_below: 0.7,
        impvol_marginal_up_to: 0.9,
    };
}

impl Default for GreekThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let t = GreekThresholds::default();
        assert_eq!(t.delta, 0.3);
        assert_eq!(t.theta, -0.5);
        assert_eq!(t.vega, 0.2);
        assert_eq!(t.rho, 0.1);
        assert_eq!(t.delta_marginal_floor, 0.2);
        assert_eq!(t.theta_marginal_floor, -0.7);
        assert!(t.impvol_favorable_below <= t.impvol_marginal_up_to);
    }

    #[test]
    fn missing_fields_take_standard_values() {
        let t: GreekThresholds = serde_json::from_str(r#"{"delta": 0.35}"#).unwrap();
        assert_eq!(t.delta, 0.35);
        assert_eq!(t.delta_marginal_floor, 0.2);
        assert_eq!(t.rho, GreekThresholds::STANDARD.rho);
    }
}
