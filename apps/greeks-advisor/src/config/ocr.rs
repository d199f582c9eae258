//! Text recognition configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Tesseract command configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Run text recognition for image uploads.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Executable to run.
    #[serde(default = "default_command")]
    pub command: String,
    /// Arguments; the image is written to stdin and text read from stdout.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_command(),
            args: default_args(),
        }
    }
}

fn default_command() -> String {
    "tesseract".to_string()
}

fn default_args() -> Vec<String> {
    vec!["stdin".to_string(), "stdout".to_string()]
}
