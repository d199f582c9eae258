//! Application Layer
//!
//! Orchestrates domain logic for one analysis cycle.
//!
//! - `ports`: Interfaces for external systems (`TextRecognitionPort`)
//! - `use_cases`: `AnalyzeGreeks`
//! - `dto`: Data transfer objects for API boundaries

pub mod dto;
pub mod ports;
pub mod use_cases;
