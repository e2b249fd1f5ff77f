//! Myanmar sign classification
//!
//! Maps one raw code to the role it plays relative to the base consonant
//! of its syllable.

/// A single code as stored in a syllable slot or emitted to the host
pub type CharCode = u16;

/// Empty slot sentinel (never a valid input character)
pub const NULL_CHAR: CharCode = 0x00;

/// Number of slots in a syllable, one per category
pub const WORD_LENGTH: usize = 17;

/// Role of a sign within a syllable
///
/// The discriminant is the slot index inside [`Syllable`](super::syllable::Syllable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignCategory {
    /// ThaWaiHtoe (ေ)
    PreBaseVowel = 0,
    /// RaRitt (ြ)
    MedialRa = 1,
    /// Consonant
    BaseConsonant = 2,
    /// DoubleConsonant (wide or stacked consonant forms)
    DoubleStoryConsonant = 3,
    /// Stacked lower consonant
    LowerConsonant = 4,
    /// LoneGyiTin (ိ ီ)
    UpperVowelSign = 5,
    /// HaHtoe (ှ)
    MedialHa = 6,
    /// WaSwal (ွ)
    MedialWa = 7,
    /// YaPint (ျ)
    MedialYa = 8,
    /// TeeTeeTin (ံ)
    Anusvara = 9,
    /// ChangNyin (ု ူ)
    LowerVowelSign = 10,
    /// NoutPyit (ဲ)
    VowelSignAi = 11,
    /// YeeKhya (ါ ာ)
    VowelSignAa = 12,
    /// AThart (်)
    Virama = 13,
    /// OutNyint (့)
    DotBelow = 14,
    /// WittSaPout (း)
    Visarga = 15,
    /// Anything outside the syllable model; passed through untouched
    Other = 16,
}

impl SignCategory {
    /// All categories in slot order
    pub const ALL: [SignCategory; WORD_LENGTH] = [
        SignCategory::PreBaseVowel,
        SignCategory::MedialRa,
        SignCategory::BaseConsonant,
        SignCategory::DoubleStoryConsonant,
        SignCategory::LowerConsonant,
        SignCategory::UpperVowelSign,
        SignCategory::MedialHa,
        SignCategory::MedialWa,
        SignCategory::MedialYa,
        SignCategory::Anusvara,
        SignCategory::LowerVowelSign,
        SignCategory::VowelSignAi,
        SignCategory::VowelSignAa,
        SignCategory::Virama,
        SignCategory::DotBelow,
        SignCategory::Visarga,
        SignCategory::Other,
    ];

    /// Slot index of this category
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category for a raw slot index (None when out of range)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name used by Myanmar typists for this sign
    pub fn traditional_name(self) -> &'static str {
        match self {
            SignCategory::PreBaseVowel => "ThaWaiHtoe",
            SignCategory::MedialRa => "RaRitt",
            SignCategory::BaseConsonant => "Consonant",
            SignCategory::DoubleStoryConsonant => "DoubleConsonant",
            SignCategory::LowerConsonant => "LowerConsonant",
            SignCategory::UpperVowelSign => "LoneGyiTin",
            SignCategory::MedialHa => "HaHtoe",
            SignCategory::MedialWa => "WaSwal",
            SignCategory::MedialYa => "YaPint",
            SignCategory::Anusvara => "TeeTeeTin",
            SignCategory::LowerVowelSign => "ChangNyin",
            SignCategory::VowelSignAi => "NoutPyit",
            SignCategory::VowelSignAa => "YeeKhya",
            SignCategory::Virama => "AThart",
            SignCategory::DotBelow => "OutNyint",
            SignCategory::Visarga => "WittSaPout",
            SignCategory::Other => "Other",
        }
    }

    /// Categories that can open a new syllable
    pub fn is_syllable_initial(self) -> bool {
        matches!(
            self,
            SignCategory::PreBaseVowel
                | SignCategory::MedialRa
                | SignCategory::BaseConsonant
                | SignCategory::DoubleStoryConsonant
                | SignCategory::Other
        )
    }
}

/// Classify one raw code
///
/// Total: codes outside the consonant ranges and the sign table are `Other`.
pub fn classify(code: i32) -> SignCategory {
    match code {
        0x1000..=0x102A | 0x103F..=0x1057 | 0xAA60..=0xAA7B => SignCategory::BaseConsonant,
        0x1031 => SignCategory::PreBaseVowel,
        0x103C => SignCategory::MedialRa,
        0x102D | 0x102E => SignCategory::UpperVowelSign,
        0x103E => SignCategory::MedialHa,
        0x103D => SignCategory::MedialWa,
        0x103B => SignCategory::MedialYa,
        0x1036 => SignCategory::Anusvara,
        0x102F | 0x1030 => SignCategory::LowerVowelSign,
        0x1032 => SignCategory::VowelSignAi,
        0x102B | 0x102C => SignCategory::VowelSignAa,
        0x103A => SignCategory::Virama,
        0x1037 => SignCategory::DotBelow,
        0x1038 => SignCategory::Visarga,
        _ => SignCategory::Other,
    }
}

/// Myanmar or Myanmar Extended-A block
pub fn is_my_char(code: i32) -> bool {
    (0x1000..=0x109F).contains(&code) || (0xAA60..=0xAA7B).contains(&code)
}

/// True if any character of the text is in a Myanmar block
pub fn contains_my_char(text: &str) -> bool {
    text.chars().any(|c| is_my_char(c as i32))
}

/// Whether the code continues a word for the host's boundary detection
pub fn is_alphabet(code: i32) -> bool {
    match classify(code) {
        SignCategory::PreBaseVowel
        | SignCategory::MedialRa
        | SignCategory::BaseConsonant
        | SignCategory::DoubleStoryConsonant => true,
        _ => is_letter(code),
    }
}

// Signs and foreign codes all count as letters; the keyboard never splits a
// word on them.
fn is_letter(_code: i32) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consonant_ranges() {
        assert_eq!(classify(0x1000), SignCategory::BaseConsonant); // က
        assert_eq!(classify(0x102A), SignCategory::BaseConsonant); // ဪ
        assert_eq!(classify(0x103F), SignCategory::BaseConsonant);
        assert_eq!(classify(0x1057), SignCategory::BaseConsonant);
        assert_eq!(classify(0xAA60), SignCategory::BaseConsonant);
        assert_eq!(classify(0xAA7B), SignCategory::BaseConsonant);
    }

    #[test]
    fn test_sign_table() {
        assert_eq!(classify(0x1031), SignCategory::PreBaseVowel);
        assert_eq!(classify(0x103C), SignCategory::MedialRa);
        assert_eq!(classify(0x102D), SignCategory::UpperVowelSign);
        assert_eq!(classify(0x102E), SignCategory::UpperVowelSign);
        assert_eq!(classify(0x103E), SignCategory::MedialHa);
        assert_eq!(classify(0x103D), SignCategory::MedialWa);
        assert_eq!(classify(0x103B), SignCategory::MedialYa);
        assert_eq!(classify(0x1036), SignCategory::Anusvara);
        assert_eq!(classify(0x102F), SignCategory::LowerVowelSign);
        assert_eq!(classify(0x1030), SignCategory::LowerVowelSign);
        assert_eq!(classify(0x1032), SignCategory::VowelSignAi);
        assert_eq!(classify(0x102B), SignCategory::VowelSignAa);
        assert_eq!(classify(0x102C), SignCategory::VowelSignAa);
        assert_eq!(classify(0x103A), SignCategory::Virama);
        assert_eq!(classify(0x1037), SignCategory::DotBelow);
        assert_eq!(classify(0x1038), SignCategory::Visarga);
    }

    #[test]
    fn test_other_fallback() {
        assert_eq!(classify(0x0041), SignCategory::Other);
        assert_eq!(classify(0x0020), SignCategory::Other);
        assert_eq!(classify(0x1039), SignCategory::Other);
        // legacy glyph codes are not classified as signs
        assert_eq!(classify(0x106E), SignCategory::Other);
        assert_eq!(classify(0x108B), SignCategory::Other);
        assert_eq!(classify(-1), SignCategory::Other);
        assert_eq!(classify(0x10000), SignCategory::Other);
    }

    #[test]
    fn test_is_my_char() {
        assert!(is_my_char(0x1000));
        assert!(is_my_char(0x109F));
        assert!(is_my_char(0xAA60));
        assert!(is_my_char(0xAA7B));
        assert!(!is_my_char(0x0FFF));
        assert!(!is_my_char(0x10A0));
        assert!(!is_my_char(0xAA5F));
        assert!(!is_my_char(0xAA7C));
        assert!(!is_my_char(0x41));
    }

    #[test]
    fn test_is_my_char_matches_ranges() {
        for code in 0..0x10000 {
            let expected = (0x1000..=0x109F).contains(&code) || (0xAA60..=0xAA7B).contains(&code);
            assert_eq!(is_my_char(code), expected, "code {:#X}", code);
        }
    }

    #[test]
    fn test_contains_my_char() {
        assert!(contains_my_char("abc\u{1000}"));
        assert!(!contains_my_char("abc"));
        assert!(!contains_my_char(""));
    }

    #[test]
    fn test_is_alphabet() {
        for code in 0..0x10000 {
            if matches!(
                classify(code),
                SignCategory::PreBaseVowel
                    | SignCategory::MedialRa
                    | SignCategory::BaseConsonant
                    | SignCategory::DoubleStoryConsonant
            ) {
                assert!(is_alphabet(code), "code {:#X}", code);
            }
        }
        // signs and foreign codes fall through to the letter test
        assert!(is_alphabet(0x103A));
        assert!(is_alphabet(0x0041));
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, category) in SignCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(SignCategory::from_index(i), Some(*category));
        }
        assert_eq!(SignCategory::from_index(WORD_LENGTH), None);
    }

    #[test]
    fn test_syllable_initial() {
        assert!(SignCategory::PreBaseVowel.is_syllable_initial());
        assert!(SignCategory::MedialRa.is_syllable_initial());
        assert!(SignCategory::BaseConsonant.is_syllable_initial());
        assert!(SignCategory::DoubleStoryConsonant.is_syllable_initial());
        assert!(SignCategory::Other.is_syllable_initial());
        assert!(!SignCategory::MedialYa.is_syllable_initial());
        assert!(!SignCategory::Virama.is_syllable_initial());
    }

    #[test]
    fn test_traditional_name() {
        assert_eq!(SignCategory::MedialYa.traditional_name(), "YaPint");
        assert_eq!(SignCategory::Visarga.traditional_name(), "WittSaPout");
    }
}
