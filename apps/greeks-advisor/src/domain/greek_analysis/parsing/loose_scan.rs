//! Loose Scan parser for noisy OCR text.
//!
//! A line contributes when it contains a metric keyword anywhere and its
//! last whitespace-separated token looks numeric. Input is expected to be
//! lower-cased already.

use crate::domain::greek_analysis::value_objects::{GreekSnapshot, MetricName, OptionType};

use super::{GreekParser, ParsedGreeks};

/// Keyword-anchored, noise-tolerant line parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LooseScanParser;

impl LooseScanParser {
    /// Create a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// First metric keyword contained in the line, in scan order.
    fn keyword_in(line: &str) -> Option<MetricName> {
        MetricName::ALL
            .into_iter()
            .find(|m| line.contains(m.as_str()))
    }

    /// Trailing token as a number, if it looks like one.
    fn trailing_value(line: &str) -> Option<f64> {
        let token = line.split_whitespace().next_back()?;
        let digits: String = token.chars().filter(|c| *c != '.' && *c != '-').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        token.parse::<f64>().ok()
    }
}

impl GreekParser for LooseScanParser {
    fn parse(&self, text: &str) -> ParsedGreeks {
        let mut snapshot = GreekSnapshot::EMPTY;

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let Some(metric) = Self::keyword_in(line) else {
                continue;
            };
            match Self::trailing_value(line) {
                Some(value) => snapshot.set(metric, value),
                None => tracing::debug!(%metric, line, "Skipping line without numeric value"),
            }
        }

        ParsedGreeks {
            snapshot,
            option_type: OptionType::Unknown,
        }
    }

    fn name(&self) -> &'static str {
        "loose_scan"
    }
}
