//! Anchored Match parser for clean pasted text.
//!
//! Expects one `Name value` pair per line. The first non-empty line may
//! declare the option type ("call"/"put"), in which case it is consumed.
//! Values need a fractional part: `delta 0.45` matches, `delta 45` does not.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::greek_analysis::value_objects::{GreekSnapshot, MetricName, OptionType};

use super::{GreekParser, ParsedGreeks, resolve_option_type};

/// Strict pattern-based line parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchoredMatchParser;

impl AnchoredMatchParser {
    /// Create a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
    fn line_pattern() -> &'static Regex {
        static LINE_REGEX: OnceLock<Regex> = OnceLock::new();
        LINE_REGEX.get_or_init(|| {
            Regex::new(r"^(\w+)\s+(-?\d+\.\d+)").expect("greek line regex is valid")
        })
    }

    /// Metric and value from one line, if it has the expected shape.
    fn match_line(line: &str) -> Option<(MetricName, f64)> {
        let caps = Self::line_pattern().captures(line.trim())?;
        let name = caps.get(1)?.as_str();
        let value = caps.get(2)?.as_str();

        let Ok(metric) = name.parse::<MetricName>() else {
            tracing::debug!(name, "Skipping unrecognized metric name");
            return None;
        };
        value.parse::<f64>().ok().map(|v| (metric, v))
    }
}

impl GreekParser for AnchoredMatchParser {
    fn parse(&self, text: &str) -> ParsedGreeks {
        let mut lines = text.lines().peekable();

        while lines.next_if(|l| l.trim().is_empty()).is_some() {}

        let option_type = lines.peek().map_or(OptionType::Unknown, |header| {
            resolve_option_type(header)
        });
        if option_type.is_known() {
            lines.next();
        }

        let mut snapshot = GreekSnapshot::EMPTY;
        for (metric, value) in lines.filter_map(Self::match_line) {
            snapshot.set(metric, value);
        }

        ParsedGreeks {
            snapshot,
            option_type,
        }
    }

    fn name(&self) -> &'static str {
        "anchored_match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn parse(text: &str) -> ParsedGreeks {
        AnchoredMatchParser::new().parse(text)
    }

    #[test]
    fn parses_call_block() {
        let parsed = parse(
            "AAPL 17JAN 190 Call\n\
             Delta 0.5234\n\
             Gamma 0.0212\n\
             Theta -0.1543\n\
             Vega 0.2811\n\
             Rho 0.1120\n\
             ImpVol 0.3200\n",
        );
        assert_eq!(parsed.option_type, OptionType::Call);
        let s = parsed.snapshot;
        assert_eq!(s.delta, Some(0.5234));
        assert_eq!(s.gamma, Some(0.0212));
        assert_eq!(s.theta, Some(-0.1543));
        assert_eq!(s.vega, Some(0.2811));
        assert_eq!(s.rho, Some(0.1120));
        assert_eq!(s.impvol, Some(0.32));
    }

    #[test]
    fn header_without_type_is_still_parsed_as_data() {
        let parsed = parse("Delta 0.40\nVega 0.25");
        assert_eq!(parsed.option_type, OptionType::Unknown);
        assert_eq!(parsed.snapshot.delta, Some(0.40));
        assert_eq!(parsed.snapshot.vega, Some(0.25));
    }

    #[test]
    fn leading_blank_lines_are_skipped_before_header() {
        let parsed = parse("\n   \nNIFTY 24000 PE put\nDelta -0.41");
        assert_eq!(parsed.option_type, OptionType::Put);
        assert_eq!(parsed.snapshot.delta, Some(-0.41));
    }

    #[test]
    fn only_first_line_declares_type() {
        let parsed = parse("Delta 0.40\nput protection\nVega 0.25");
        assert_eq!(parsed.option_type, OptionType::Unknown);
    }

    #[test]
    fn last_write_wins() {
        assert_eq!(parse("delta 0.1\ndelta 0.9").snapshot.delta, Some(0.9));
    }

    #[test_case("Delta 45" ; "integer value")]
    #[test_case("Delta: 0.45" ; "colon after name")]
    #[test_case("Delta .45" ; "missing integer part")]
    #[test_case("Strike 190.00" ; "unknown metric")]
    #[test_case("Contract multiplier 100" ; "commentary")]
    #[test_case("+0.45 Delta" ; "value first")]
    fn skips_lines_with_wrong_shape(line: &str) {
        assert!(parse(line).snapshot.is_empty());
    }

    #[test]
    fn preserves_sign_and_tolerates_trailing_text() {
        let s = parse("THETA -0.0500 per day").snapshot;
        assert_eq!(s.theta, Some(-0.05));
    }

    #[test]
    fn empty_input() {
        let parsed = parse("");
        assert_eq!(parsed, ParsedGreeks::default());
    }

    proptest! {
        #[test]
        fn put_header_always_resolves_put(
            prefix in "[A-Za-z0-9 ]{0,12}",
            put in "(put|PUT|Put|pUt)",
            body in "[A-Za-z0-9 .\\-\n]{0,80}",
        ) {
            prop_assume!(!prefix.to_lowercase().contains("call"));
            let text = format!("{prefix}{put}\n{body}");
            prop_assert_eq!(parse(&text).option_type, OptionType::Put);
        }

        #[test]
        fn parsing_is_idempotent(text in "((Delta|gamma|THETA|vega|Rho|impvol|call|put|x) -?[0-9]{1,3}\\.?[0-9]{0,3}\n){0,6}") {
            prop_assert_eq!(parse(&text), parse(&text));
        }
    }
}
