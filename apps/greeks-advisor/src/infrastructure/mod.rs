//! Infrastructure Layer
//!
//! Adapters for the application ports and the inbound HTTP API.

pub mod http;
pub mod ocr;
