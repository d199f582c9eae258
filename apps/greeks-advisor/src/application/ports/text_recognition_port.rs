//! Text Recognition Port (Driven Port)
//!
//! Interface for turning an image into text. Bitmap pre-processing is the
//! implementation's concern; callers only see the recognized text.

use async_trait::async_trait;

/// Text recognition error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecognitionError {
    /// Recognition is switched off.
    #[error("Text recognition is not available")]
    Unavailable,

    /// The recognizer could not be started.
    #[error("Failed to start text recognizer: {message}")]
    SpawnFailed {
        /// Error details.
        message: String,
    },

    /// The recognizer ran but reported failure.
    #[error("Text recognizer failed (exit code {code:?}): {stderr}")]
    ProcessFailed {
        /// Exit code, if any.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// I/O error while talking to the recognizer.
    #[error("Text recognizer I/O error: {message}")]
    Io {
        /// Error details.
        message: String,
    },
}

/// Port for optical character recognition.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextRecognitionPort: Send + Sync {
    /// Recognize the text contained in an encoded image.
    async fn image_to_text(&self, image: &[u8]) -> Result<String, RecognitionError>;
}

/// Recognizer that always returns the same text.
#[derive(Debug, Clone, Default)]
pub struct StaticTextRecognizer {
    text: String,
}

impl StaticTextRecognizer {
    /// Create a recognizer returning `text` for every image.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TextRecognitionPort for StaticTextRecognizer {
    async fn image_to_text(&self, _image: &[u8]) -> Result<String, RecognitionError> {
        Ok(self.text.clone())
    }
}

/// Recognizer used when OCR is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTextRecognizer;

#[async_trait]
impl TextRecognitionPort for DisabledTextRecognizer {
    async fn image_to_text(&self, _image: &[u8]) -> Result<String, RecognitionError> {
        Err(RecognitionError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_recognizer_ignores_image() {
        let r = StaticTextRecognizer::new("delta 0.5");
        assert_eq!(r.image_to_text(b"png").await.unwrap(), "delta 0.5");
        assert_eq!(r.image_to_text(&[]).await.unwrap(), "delta 0.5");
    }

    #[tokio::test]
    async fn disabled_recognizer_is_unavailable() {
        let err = DisabledTextRecognizer.image_to_text(b"png").await.unwrap_err();
        assert!(matches!(err, RecognitionError::Unavailable));
    }

    #[test]
    fn error_display() {
        let err = RecognitionError::ProcessFailed {
            code: Some(1),
            stderr: "Error in pixReadMem".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code Some(1)"));
        assert!(msg.contains("pixReadMem"));
    }
}
