//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod analyze_greeks;

pub use analyze_greeks::{AnalysisError, AnalyzeGreeksUseCase};
