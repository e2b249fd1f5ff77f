//! Visual glyph variants back to their plain logical codes
//!
//! The rewrite rules pick one of several look-alike glyphs for the same
//! sign. This table undoes that choice so two renderings of the same sign
//! compare equal.

use std::borrow::Cow;

use super::category::{is_my_char, CharCode};

/// Plain form of a glyph variant, or `None` when the code is already plain
#[rustfmt::skip]
fn variant_form(code: i32) -> Option<&'static [CharCode]> {
    let form: &'static [CharCode] = match code {
        // medial ra
        0x107E | 0x107F | 0x1080 | 0x1081 | 0x1082 | 0x1083 | 0x1084 => &[0x103B],
        // upper vowel sign with kinzi or anusvara
        0x108B => &[0x1064, 0x102D],
        0x108E => &[0x102D, 0x1036],
        0x108C => &[0x1004, 0x1039, 0x102E],
        // medials
        0x108A => &[0x103C, 0x103D],
        0x1087 => &[0x103D],
        0x107D => &[0x103A],
        // lower vowel sign
        0x1033 => &[0x102F],
        0x1088 => &[0x103D, 0x102F],
        0x1034 => &[0x1030],
        0x1089 => &[0x103D, 0x1030],
        // dot below
        0x1094 | 0x1095 => &[0x1037],
        // kinzi
        0x1064 => &[0x1004, 0x1039],
        0x108D => &[0x1004, 0x1039, 0x1036],
        // aa sign
        0x102B => &[0x102C],
        0x105A => &[0x102C, 0x1039],
        // consonant forms
        0x106A => &[0x1025],
        0x1026 => &[0x1025, 0x102E],
        0x1029 => &[0x107E, 0x101E],
        0x102A => &[0x1031, 0x107E, 0x101E, 0x102C, 0x1039],
        0x104E => &[0x1044, 0x1004, 0x1039, 0x1038],
        0x1008 => &[0x1005, 0x103A],
        0x1009 | 0x106B => &[0x100A],
        0x108F => &[0x1014],
        0x1090 => &[0x101B],
        0x106E => &[0x100D, 0x100D],
        0x106F => &[0x100E, 0x100D],
        0x1091 => &[0x100F, 0x100D],
        0x1092 => &[0x100B, 0x106D],
        0x1097 => &[0x100B, 0x106C],
        // lower consonants
        0x1066 => &[0x1067],
        0x1071 => &[0x1072],
        0x1073 => &[0x1074],
        0x107B => &[0x1093],
        _ => return None,
    };
    Some(form)
}

/// Logical code sequence behind a (possibly visual-variant) code
///
/// Codes outside the Myanmar blocks and plain Myanmar codes map to
/// themselves. Variant forms borrow from the static table.
pub fn normal_form(code: i32) -> Cow<'static, [CharCode]> {
    match variant_form(code) {
        Some(form) if is_my_char(code) => Cow::Borrowed(form),
        _ => Cow::Owned(vec![code as CharCode]),
    }
}

/// Whether two codes render the same logical sign
pub fn is_char_equal(a: i32, b: i32) -> bool {
    if is_my_char(a) && is_my_char(b) {
        normal_form(a) == normal_form(b)
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_codes_map_to_themselves() {
        assert_eq!(normal_form(0x1000), vec![0x1000]);
        assert_eq!(normal_form(0x0041), vec![0x0041]);
        assert_eq!(normal_form(0x103B), vec![0x103B]);
    }

    #[test]
    fn test_medial_ra_variants() {
        for code in 0x107E..=0x1084 {
            assert_eq!(normal_form(code), vec![0x103B], "{:#X}", code);
        }
    }

    #[test]
    fn test_multi_code_forms() {
        assert_eq!(normal_form(0x108D), vec![0x1004, 0x1039, 0x1036]);
        assert_eq!(normal_form(0x102A), vec![0x1031, 0x107E, 0x101E, 0x102C, 0x1039]);
        assert_eq!(normal_form(0x1089), vec![0x103D, 0x1030]);
    }

    #[test]
    fn test_variant_forms_are_borrowed() {
        assert!(matches!(normal_form(0x1033), Cow::Borrowed(&[0x102F])));
        assert!(matches!(normal_form(0x1000), Cow::Owned(_)));
    }

    #[test]
    fn test_is_char_equal() {
        assert!(is_char_equal(0x1033, 0x102F));
        assert!(is_char_equal(0x1094, 0x1095));
        assert!(is_char_equal(0x1009, 0x106B));
        assert!(!is_char_equal(0x102F, 0x1030));
        assert!(is_char_equal(0x41, 0x41));
        assert!(!is_char_equal(0x41, 0x42));
        // never equal across the Myanmar boundary
        assert!(!is_char_equal(0x1000, 0x41));
    }
}
