//! Text-level correction entry points

use super::category::CharCode;
use super::driver::process;
use crate::config::CorrectionConfig;

/// Zero width non-joiner used to keep signs on the intended base
const JBFIX_CHAR: u16 = 0x200C;

/// Reorder the Myanmar syllables of a text
///
/// Text too short to correct is returned unchanged.
pub fn correct_text(input: &str) -> String {
    let codes: Vec<i32> = input.encode_utf16().map(i32::from).collect();
    let output = process(&codes);
    if output.is_empty() {
        return input.to_string();
    }
    String::from_utf16_lossy(&output.compact())
}

/// Guard the pre-base vowel and the stacking virama with ZWNJ
///
/// Some shaping engines attach ေ to the preceding cluster and let ္ pull
/// the next consonant under the wrong base; the joiner stops both.
pub fn jelly_bean_fix(input: &str) -> String {
    let mut units: Vec<CharCode> = Vec::with_capacity(input.len());
    for unit in input.encode_utf16() {
        match unit {
            0x1031 => {
                units.push(JBFIX_CHAR);
                units.push(unit);
            }
            0x1039 => {
                units.push(unit);
                units.push(JBFIX_CHAR);
            }
            _ => units.push(unit),
        }
    }
    String::from_utf16_lossy(&units)
}

/// Apply the corrections enabled in the config
pub fn word_correction(input: &str, config: &CorrectionConfig) -> String {
    let mut output = if config.quick_fixes {
        correct_text(input)
    } else {
        input.to_string()
    };
    if config.jelly_bean_fix {
        output = jelly_bean_fix(&output);
    }
    output
}
