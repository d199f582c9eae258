//! Greek value parsing strategies.
//!
//! Both strategies implement [`GreekParser`]; the caller picks one from the
//! input channel. Parsing never fails: unusable lines are skipped and an
//! empty snapshot means nothing was extracted.

mod anchored_match;
mod loose_scan;
mod option_type_resolver;

use serde::{Deserialize, Serialize};

use super::value_objects::{GreekSnapshot, OptionType};

pub use anchored_match::AnchoredMatchParser;
pub use loose_scan::LooseScanParser;
pub use option_type_resolver::resolve_option_type;

/// Result of parsing one input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedGreeks {
    /// Extracted values.
    pub snapshot: GreekSnapshot,
    /// Declared option type, `Unknown` when the input carries none.
    pub option_type: OptionType,
}

/// Converts raw text into a partial snapshot.
pub trait GreekParser: Send + Sync {
    /// Parse the text.
    fn parse(&self, text: &str) -> ParsedGreeks;

    /// Short strategy name for logs.
    fn name(&self) -> &'static str;
}
