//! Tesseract Recognizer (Driven Adapter)
//!
//! Runs an external OCR command, writing the encoded image to its stdin
//! and reading recognized text from its stdout. Image decoding and
//! pre-processing are left to the command.

use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{RecognitionError, TextRecognitionPort};
use crate::config::OcrConfig;

/// OCR adapter backed by the `tesseract` command line tool.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    command: String,
    args: Vec<String>,
}

impl TesseractRecognizer {
    /// Create a recognizer running `command` with `args`.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Create a recognizer from configuration.
    #[must_use]
    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Command being run.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl TextRecognitionPort for TesseractRecognizer {
    #[tracing::instrument(skip_all, fields(command = %self.command, image_bytes = image.len()))]
    async fn image_to_text(&self, image: &[u8]) -> Result<String, RecognitionError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RecognitionError::SpawnFailed {
                message: format!("{}: {e}", self.command),
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| RecognitionError::Io {
            message: "stdin not captured".to_string(),
        })?;

        let feed = async move {
            let written = stdin.write_all(image).await;
            drop(stdin);
            match written {
                // The command may exit before consuming all input; its exit
                // status decides the outcome.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };

        let (written, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| RecognitionError::Io {
            message: e.to_string(),
        })?;

        if !output.status.success() {
            return Err(RecognitionError::ProcessFailed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        written.map_err(|e| RecognitionError::Io {
            message: e.to_string(),
        })?;

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(text_len = text.len(), "Recognized text");
        Ok(text)
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stdout_is_returned_as_text() {
        let recognizer = TesseractRecognizer::new("cat", Vec::new());
        let text = recognizer.image_to_text(b"Delta 0.45\nTheta -0.2").await.unwrap();
        assert_eq!(text, "Delta 0.45\nTheta -0.2");
    }

    #[tokio::test]
    async fn test_missing_command_is_spawn_failure() {
        let recognizer = TesseractRecognizer::new("greeks-advisor-no-such-ocr-binary", Vec::new());
        let err = recognizer.image_to_text(b"png").await.unwrap_err();
        assert!(matches!(err, RecognitionError::SpawnFailed { .. }));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_process_failure() {
        let recognizer = TesseractRecognizer::new(
            "sh",
            vec!["-c".to_string(), "echo unreadable image >&2; exit 3".to_string()],
        );
        let err = recognizer.image_to_text(b"png").await.unwrap_err();
        match err {
            RecognitionError::ProcessFailed { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "unreadable image");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_config_uses_configured_command() {
        let recognizer = TesseractRecognizer::from_config(&OcrConfig::default());
        assert_eq!(recognizer.command(), "tesseract");
        assert_eq!(recognizer.args, vec!["stdin", "stdout"]);
    }
}
