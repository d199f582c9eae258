//! Greek Analysis Domain Services

mod band_classifier;
mod recommendation_engine;

pub use band_classifier::BandClassifier;
pub use recommendation_engine::{RecommendationEngine, RecommendationRules};
