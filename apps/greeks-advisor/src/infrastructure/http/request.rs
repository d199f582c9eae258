//! HTTP request DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::greek_analysis::{ManualGreeks, OptionType, UnknownOptionType};

/// Pasted text to run through Anchored Match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeTextRequest {
    /// Raw text; the first non-empty line may declare call or put.
    pub text: String,
}

/// Directly entered values.
///
/// Missing metrics default to 0.0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManualEntryRequest {
    /// The six metrics.
    #[serde(flatten)]
    pub greeks: ManualGreeks,
    /// "call" or "put" (any case); omitted to evaluate both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,
}

impl ManualEntryRequest {
    /// Parse the declared option type; blank counts as omitted.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOptionType` for anything other than call or put.
    pub fn option_type(&self) -> Result<Option<OptionType>, UnknownOptionType> {
        match self.option_type.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(label) => label.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_fields_default_to_zero() {
        let req: ManualEntryRequest =
            serde_json::from_str(r#"{"delta": 0.35, "option_type": "Call"}"#).unwrap();
        assert!((req.greeks.delta - 0.35).abs() < f64::EPSILON);
        assert_eq!(req.greeks.rho, 0.0);
        assert_eq!(req.greeks.impvol, 0.0);
        assert_eq!(req.option_type(), Ok(Some(OptionType::Call)));
    }

    #[test]
    fn blank_option_type_is_omitted() {
        let req = ManualEntryRequest {
            option_type: Some("  ".to_string()),
            ..ManualEntryRequest::default()
        };
        assert_eq!(req.option_type(), Ok(None));
        assert_eq!(ManualEntryRequest::default().option_type(), Ok(None));
    }

    #[test]
    fn unknown_option_type_is_rejected() {
        let req = ManualEntryRequest {
            option_type: Some("straddle".to_string()),
            ..ManualEntryRequest::default()
        };
        assert!(req.option_type().is_err());
    }
}
