//! Analysis DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::greek_analysis::{
    Band, FactorCheck, GreekSnapshot, ManualGreeks, MetricName, OptionType, Recommendation,
    Verdict,
};

/// Where the input of an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputChannel {
    /// Screenshot run through text recognition.
    Image,
    /// User-pasted text.
    Text,
    /// Values typed in directly.
    Manual,
}

impl InputChannel {
    /// Lowercase label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::Manual => "manual",
        }
    }
}

impl std::fmt::Display for InputChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input of one analysis cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequestDto {
    /// Encoded screenshot bytes.
    Image {
        /// Image payload.
        bytes: Vec<u8>,
    },
    /// Pasted text, original case.
    Text {
        /// Raw text.
        text: String,
    },
    /// Directly entered values.
    Manual {
        /// All six metrics.
        greeks: ManualGreeks,
        /// Option type, when the user picked one.
        option_type: Option<OptionType>,
    },
}

impl AnalysisRequestDto {
    /// Channel of this request.
    #[must_use]
    pub const fn channel(&self) -> InputChannel {
        match self {
            Self::Image { .. } => InputChannel::Image,
            Self::Text { .. } => InputChannel::Text,
            Self::Manual { .. } => InputChannel::Manual,
        }
    }
}

/// Band of one metric for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBandDto {
    /// Metric.
    pub metric: MetricName,
    /// Value shown.
    pub value: f64,
    /// Display tier.
    pub band: Band,
}

/// Recommendation and bands for one option type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationDto {
    /// Option type evaluated.
    pub option_type: OptionType,
    /// Decision.
    pub verdict: Verdict,
    /// True when the verdict is to consider buying.
    pub favorable: bool,
    /// Human-readable justification.
    pub message: String,
    /// Evaluated factors.
    pub factors: Vec<FactorCheck>,
    /// Bands for the metrics present in the snapshot.
    pub bands: Vec<MetricBandDto>,
}

impl EvaluationDto {
    /// Build from a recommendation and its bands.
    #[must_use]
    pub fn new(recommendation: Recommendation, bands: Vec<MetricBandDto>) -> Self {
        Self {
            option_type: recommendation.option_type,
            verdict: recommendation.verdict,
            favorable: recommendation.is_favorable(),
            message: recommendation.message().to_string(),
            factors: recommendation.factors,
            bands,
        }
    }
}

/// Output of one analysis cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReportDto {
    /// Unique ID of this analysis.
    pub analysis_id: Uuid,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
    /// Input channel.
    pub channel: InputChannel,
    /// Extracted or entered values.
    pub snapshot: GreekSnapshot,
    /// Declared option type (`UNKNOWN` for images).
    pub option_type: OptionType,
    /// True when no metric could be extracted.
    pub nothing_extracted: bool,
    /// One evaluation per option type considered.
    pub evaluations: Vec<EvaluationDto>,
}

impl AnalysisReportDto {
    /// Evaluation for an option type, if one was produced.
    #[must_use]
    pub fn evaluation(&self, option_type: OptionType) -> Option<&EvaluationDto> {
        self.evaluations
            .iter()
            .find(|e| e.option_type == option_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_of_request() {
        let req = AnalysisRequestDto::Text {
            text: "Delta 0.5".to_string(),
        };
        assert_eq!(req.channel(), InputChannel::Text);
        let req = AnalysisRequestDto::Image { bytes: vec![1, 2] };
        assert_eq!(req.channel().to_string(), "image");
    }

    #[test]
    fn evaluation_from_sentinel() {
        let e = EvaluationDto::new(Recommendation::type_not_recognized(), Vec::new());
        assert_eq!(e.verdict, Verdict::TypeNotRecognized);
        assert!(!e.favorable);
        assert!(e.message.contains("not recognized"));
    }

    #[test]
    fn channel_serializes_lowercase() {
        let json = serde_json::to_string(&InputChannel::Manual).unwrap();
        assert_eq!(json, "\"manual\"");
    }
}
