//! Option-type detection from a header line.

use crate::domain::greek_analysis::value_objects::OptionType;

/// Resolve the option type declared by a single header line.
///
/// "call" is checked before "put"; matching is case-insensitive and by
/// substring.
#[must_use]
pub fn resolve_option_type(line: &str) -> OptionType {
    let lowered = line.to_lowercase();
    if lowered.contains("call") {
        OptionType::Call
    } else if lowered.contains("put") {
        OptionType::Put
    } else {
        OptionType::Unknown
    }
}
