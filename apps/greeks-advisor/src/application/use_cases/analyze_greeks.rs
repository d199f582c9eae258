//! Analyze Greeks Use Case
//!
//! Runs one parse-then-classify cycle. Each call gets its input explicitly
//! and shares no state with other calls.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::application::dto::{
    AnalysisReportDto, AnalysisRequestDto, EvaluationDto, InputChannel, MetricBandDto,
};
use crate::application::ports::TextRecognitionPort;
use crate::domain::greek_analysis::{
    AnchoredMatchParser, BandClassifier, GreekParser, GreekSnapshot, LooseScanParser,
    MetricName, OptionType, ParsedGreeks, RecommendationEngine, RecommendationRules,
};
use crate::observability;

/// Errors returned by [`AnalyzeGreeksUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The request carried no usable input.
    #[error("Nothing to analyze: {channel} input is empty")]
    NothingToAnalyze {
        /// Channel of the empty request.
        channel: InputChannel,
    },
}

/// Use case for analyzing one Greek snapshot.
pub struct AnalyzeGreeksUseCase<R>
where
    R: TextRecognitionPort,
{
    recognizer: Arc<R>,
    loose_scan: LooseScanParser,
    anchored_match: AnchoredMatchParser,
    engine: RecommendationEngine,
    classifier: BandClassifier,
}

impl<R> AnalyzeGreeksUseCase<R>
where
    R: TextRecognitionPort,
{
    /// Create a new AnalyzeGreeksUseCase.
    pub fn new(recognizer: Arc<R>, rules: RecommendationRules) -> Self {
        Self {
            recognizer,
            loose_scan: LooseScanParser::new(),
            anchored_match: AnchoredMatchParser::new(),
            engine: RecommendationEngine::new(rules),
            classifier: BandClassifier::new(rules.thresholds),
        }
    }

    /// Parser strategy for a text-bearing channel.
    pub fn parser_for(&self, channel: InputChannel) -> Option<&dyn GreekParser> {
        match channel {
            InputChannel::Image => Some(&self.loose_scan),
            InputChannel::Text => Some(&self.anchored_match),
            InputChannel::Manual => None,
        }
    }

    /// Execute the use case.
    #[tracing::instrument(skip_all, fields(channel = %request.channel()))]
    pub async fn execute(
        &self,
        request: AnalysisRequestDto,
    ) -> Result<AnalysisReportDto, AnalysisError> {
        let started = Instant::now();
        let channel = request.channel();

        let (parsed, option_types) = match request {
            AnalysisRequestDto::Image { bytes } => {
                if bytes.is_empty() {
                    return Err(Self::reject(channel));
                }
                let text = self.recognize(&bytes).await.to_lowercase();
                let parsed = self.parse(channel, &text);
                (parsed, OptionType::DIRECTIONAL.to_vec())
            }
            AnalysisRequestDto::Text { text } => {
                if text.trim().is_empty() {
                    return Err(Self::reject(channel));
                }
                let parsed = self.parse(channel, &text);
                (parsed, vec![parsed.option_type])
            }
            AnalysisRequestDto::Manual {
                greeks,
                option_type,
            } => {
                let parsed = ParsedGreeks {
                    snapshot: GreekSnapshot::from(greeks),
                    option_type: option_type.unwrap_or_default(),
                };
                let types = option_type.map_or_else(|| OptionType::DIRECTIONAL.to_vec(), |t| vec![t]);
                (parsed, types)
            }
        };

        let evaluations = self.evaluate(&parsed.snapshot, &option_types);

        let report = AnalysisReportDto {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            channel,
            snapshot: parsed.snapshot,
            option_type: parsed.option_type,
            nothing_extracted: parsed.snapshot.is_empty(),
            evaluations,
        };

        observability::record_analysis(
            channel.as_str(),
            parsed.snapshot.len(),
            started.elapsed().as_secs_f64(),
        );
        for evaluation in &report.evaluations {
            observability::record_recommendation(
                evaluation.option_type.as_str(),
                evaluation.verdict.as_str(),
            );
        }

        tracing::info!(
            analysis_id = %report.analysis_id,
            metrics_extracted = parsed.snapshot.len(),
            option_type = %parsed.option_type,
            verdicts = ?report.evaluations.iter().map(|e| e.verdict).collect::<Vec<_>>(),
            "Greeks analyzed"
        );

        Ok(report)
    }

    /// Recommendation and bands for each option type, against the same snapshot.
    pub fn evaluate(
        &self,
        snapshot: &GreekSnapshot,
        option_types: &[OptionType],
    ) -> Vec<EvaluationDto> {
        option_types
            .iter()
            .map(|&option_type| {
                let recommendation = self.engine.recommend(snapshot, option_type);
                EvaluationDto::new(recommendation, self.bands(snapshot, option_type))
            })
            .collect()
    }

    fn bands(&self, snapshot: &GreekSnapshot, option_type: OptionType) -> Vec<MetricBandDto> {
        MetricName::DISPLAYED
            .into_iter()
            .filter_map(|metric| {
                let value = snapshot.get(metric)?;
                let band = self.classifier.classify(value, metric, option_type)?;
                Some(MetricBandDto {
                    metric,
                    value,
                    band,
                })
            })
            .collect()
    }

    fn reject(channel: InputChannel) -> AnalysisError {
        observability::record_rejection(channel.as_str());
        tracing::info!("Rejected analysis with empty input");
        AnalysisError::NothingToAnalyze { channel }
    }

    fn parse(&self, channel: InputChannel, text: &str) -> ParsedGreeks {
        let Some(parser) = self.parser_for(channel) else {
            return ParsedGreeks::default();
        };
        let parsed = parser.parse(text);
        tracing::debug!(
            parser = parser.name(),
            metrics_extracted = parsed.snapshot.len(),
            option_type = %parsed.option_type,
            "Parsed input text"
        );
        parsed
    }

    /// OCR text, or an empty string when recognition fails.
    async fn recognize(&self, image: &[u8]) -> String {
        match self.recognizer.image_to_text(image).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Text recognition failed, continuing with empty text");
                observability::record_ocr_failure();
                String::new()
            }
        }
    }
}
