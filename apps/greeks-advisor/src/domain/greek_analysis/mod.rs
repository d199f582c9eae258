//! Greek Analysis Bounded Context
//!
//! Extracts option Greeks from text and evaluates them.
//!
//! # Key Concepts
//!
//! - **Snapshot**: One partial reading of the six tracked metrics
//! - **Parsing**: Loose Scan (OCR text) and Anchored Match (pasted text)
//! - **Recommendation**: Threshold rule per option type, all factors must hold
//! - **Band**: Favorable / Marginal / Unfavorable display tier per metric

pub mod parsing;
pub mod services;
pub mod value_objects;

pub use parsing::{AnchoredMatchParser, GreekParser, LooseScanParser, ParsedGreeks};
pub use services::{BandClassifier, RecommendationEngine, RecommendationRules};
pub use value_objects::{
    Band, Comparison, FactorCheck, GreekSnapshot, GreekThresholds, ManualGreeks, MetricName,
    OptionType, Recommendation, UnknownOptionType, Verdict,
};
