//! Band Classifier
//!
//! Three-tier display banding per metric. The favorable bound of each
//! metric is the recommendation threshold; the marginal window sits
//! directly below it (above it for put delta and put rho). Values outside
//! both, including NaN, are unfavorable.

use crate::domain::greek_analysis::value_objects::{Band, GreekThresholds, MetricName, OptionType};

/// Stateless band classification service.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandClassifier {
    thresholds: GreekThresholds,
}

impl BandClassifier {
    /// Create a classifier over a threshold table.
    #[must_use]
    pub const fn new(thresholds: GreekThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify one metric value.
    ///
    /// Returns `None` for gamma, which has no banding rule.
    #[must_use]
    pub fn classify(&self, value: f64, metric: MetricName, option_type: OptionType) -> Option<Band> {
        let t = &self.thresholds;
        let band = match (metric, option_type) {
            (MetricName::Gamma, _) => return None,
            (MetricName::Delta | MetricName::Rho, OptionType::Unknown) => Band::Unfavorable,
            (MetricName::Delta, OptionType::Call) => rising(value, t.delta, t.delta_marginal_floor),
            (MetricName::Delta, OptionType::Put) => {
                falling(value, -t.delta, -t.delta_marginal_floor)
            }
            (MetricName::Rho, OptionType::Call) => rising(value, t.rho, t.rho_marginal_floor),
            (MetricName::Rho, OptionType::Put) => falling(value, -t.rho, -t.rho_marginal_floor),
            (MetricName::Theta, _) => rising(value, t.theta, t.theta_marginal_floor),
            (MetricName::Vega, _) => rising(value, t.vega, t.vega_marginal_floor),
            (MetricName::ImpVol, _) => {
                if value < t.impvol_favorable_below {
                    Band::Favorable
                } else if (t.impvol_favorable_below..=t.impvol_marginal_up_to).contains(&value) {
                    Band::Marginal
                } else {
                    Band::Unfavorable
                }
            }
        };
        Some(band)
    }
}

/// Favorable above `bound`, marginal in `[floor, bound]`.
fn rising(value: f64, bound: f64, floor: f64) -> Band {
    if value > bound {
        Band::Favorable
    } else if (floor..=bound).contains(&value) {
        Band::Marginal
    } else {
        Band::Unfavorable
    }
}

/// Favorable below `bound`, marginal in `[bound, ceiling]`.
fn falling(value: f64, bound: f64, ceiling: f64) -> Band {
    if value < bound {
        Band::Favorable
    } else if (bound..=ceiling).contains(&value) {
        Band::Marginal
    } else {
        Band::Unfavorable
    }
}
