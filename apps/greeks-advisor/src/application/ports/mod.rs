//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.

mod text_recognition_port;

pub use text_recognition_port::{
    DisabledTextRecognizer, RecognitionError, StaticTextRecognizer, TextRecognitionPort,
};

#[cfg(test)]
pub use text_recognition_port::MockTextRecognitionPort;
