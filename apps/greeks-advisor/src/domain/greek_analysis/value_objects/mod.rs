//! Greek Analysis Value Objects

mod band;
mod greek_snapshot;
mod metric_name;
mod option_type;
mod recommendation;
mod thresholds;

pub use band::Band;
pub use greek_snapshot::{GreekSnapshot, ManualGreeks};
pub use metric_name::{MetricName, UnknownMetric};
pub use option_type::{OptionType, UnknownOptionType};
pub use recommendation::{
    Comparison, FactorCheck, Recommendation, TYPE_NOT_RECOGNIZED_MESSAGE, Verdict,
};
pub use thresholds::GreekThresholds;
