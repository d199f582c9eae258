//! Greek Snapshot Value Object

use serde::{Deserialize, Serialize};

use super::MetricName;

/// One reading of Greek values for a single option contract.
///
/// A field is `Some` only when a value was actually extracted or entered.
/// Absent fields mean "unknown", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GreekSnapshot {
    /// Delta - directional exposure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Gamma - rate of change of delta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    /// Rho - sensitivity to interest rates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rho: Option<f64>,
    /// Theta - time decay per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    /// Vega - sensitivity to volatility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vega: Option<f64>,
    /// Implied volatility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impvol: Option<f64>,
}

/// Directly entered values; every metric is present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ManualGreeks {
    /// Delta.
    #[serde(default)]
    pub delta: f64,
    /// Gamma.
    #[serde(default)]
    pub gamma: f64,
    /// Rho.
    #[serde(default)]
    pub rho: f64,
    /// Theta.
    #[serde(default)]
    pub theta: f64,
    /// Vega.
    #[serde(default)]
    pub vega: f64,
    /// Implied volatility.
    #[serde(default)]
    pub impvol: f64,
}

impl GreekSnapshot {
    /// Empty snapshot (nothing extracted).
    pub const EMPTY: Self = Self {
        delta: None,
        gamma: None,
        rho: None,
        theta: None,
        vega: None,
        impvol: None,
    };

    /// Get the value for a metric, if present.
    #[must_use]
    pub const fn get(&self, metric: MetricName) -> Option<f64> {
        match metric {
            MetricName::Delta => self.delta,
            MetricName::Gamma => self.gamma,
            MetricName::Rho => self.rho,
            MetricName::Theta => self.theta,
            MetricName::Vega => self.vega,
            MetricName::ImpVol => self.impvol,
        }
    }

    /// Get the value for a metric, treating absence as `0.0`.
    #[must_use]
    pub fn value_or_zero(&self, metric: MetricName) -> f64 {
        self.get(metric).unwrap_or(0.0)
    }

    /// Store a value, replacing any earlier one.
    pub const fn set(&mut self, metric: MetricName, value: f64) {
        let slot = match metric {
            MetricName::Delta => &mut self.delta,
            MetricName::Gamma => &mut self.gamma,
            MetricName::Rho => &mut self.rho,
            MetricName::Theta => &mut self.theta,
            MetricName::Vega => &mut self.vega,
            MetricName::ImpVol => &mut self.impvol,
        };
        *slot = Some(value);
    }

    /// Builder-style variant of [`Self::set`].
    #[must_use]
    pub const fn with(mut self, metric: MetricName, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    /// Present metrics and their values, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricName, f64)> + '_ {
        MetricName::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|v| (m, v)))
    }

    /// Number of metrics present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ManualGreeks> for GreekSnapshot {
    fn from(m: ManualGreeks) -> Self {
        Self {
            delta: Some(m.delta),
            gamma: Some(m.gamma),
            rho: Some(m.rho),
            theta: Some(m.theta),
            vega: Some(m.vega),
            impvol: Some(m.impvol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot() {
        let s = GreekSnapshot::default();
        assert_eq!(s, GreekSnapshot::EMPTY);
        assert!(s.is_empty());
        assert_eq!(s.get(MetricName::Delta), None);
    }

    #[test]
    fn value_or_zero_fills_missing() {
        let s = GreekSnapshot::EMPTY.with(MetricName::Vega, 0.25);
        assert_eq!(s.value_or_zero(MetricName::Vega), 0.25);
        assert_eq!(s.value_or_zero(MetricName::Theta), 0.0);
        assert_eq!(s.get(MetricName::Theta), None);
    }

    #[test]
    fn set_overwrites() {
        let mut s = GreekSnapshot::EMPTY;
        s.set(MetricName::Delta, 0.1);
        s.set(MetricName::Delta, 0.9);
        assert_eq!(s.delta, Some(0.9));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn iter_follows_scan_order() {
        let s = GreekSnapshot::EMPTY
            .with(MetricName::ImpVol, 0.4)
            .with(MetricName::Delta, 0.5)
            .with(MetricName::Theta, -0.2);
        let names: Vec<MetricName> = s.iter().map(|(m, _)| m).collect();
        assert_eq!(
            names,
            vec![MetricName::Delta, MetricName::Theta, MetricName::ImpVol]
        );
    }

    #[test]
    fn manual_entry_fills_every_metric() {
        let s = GreekSnapshot::from(ManualGreeks {
            delta: 0.4,
            ..Default::default()
        });
        assert_eq!(s.len(), 6);
        assert_eq!(s.delta, Some(0.4));
        assert_eq!(s.gamma, Some(0.0));
    }

    #[test]
    fn serde_skips_absent_metrics() {
        let s = GreekSnapshot::EMPTY.with(MetricName::Rho, -0.1);
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json, serde_json::json!({ "rho": -0.1 }));
        let parsed: GreekSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, s);
    }
}
