//! Per-syllable sign buffer
//!
//! Holds at most one code per category. Legacy precomposed glyphs are
//! split into their logical signs as they are written.

use super::category::{CharCode, SignCategory, NULL_CHAR, WORD_LENGTH};
use crate::error::CorrectionError;

use SignCategory::*;

/// Legacy composite glyphs and the slots each one fills
///
/// The merge pass in `rewrite` folds most of these back together once the
/// surrounding signs have been corrected.
#[rustfmt::skip]
pub const DECOMPOSITIONS: &[(CharCode, &[(SignCategory, CharCode)])] = &[
    (0x106E, &[(BaseConsonant, 0x100D), (LowerConsonant, 0x106E)]), // ၮ
    (0x106F, &[(BaseConsonant, 0x100E), (LowerConsonant, 0x106F)]), // ၯ
    (0x1097, &[(BaseConsonant, 0x100B), (LowerConsonant, 0x1097)]), // ႗
    (0x102A, &[                                                     // ဪ
        (PreBaseVowel, 0x1031),
        (MedialRa, 0x107E),
        (DoubleStoryConsonant, 0x101E),
        (VowelSignAa, 0x102C),
        (Virama, 0x1039),
    ]),
    (0x1029, &[(MedialRa, 0x107E), (DoubleStoryConsonant, 0x101E)]), // ဩ
    (0x1026, &[(UpperVowelSign, 0x102E), (BaseConsonant, 0x1025)]),  // ဦ
    (0x104E, &[                                                     // ၎
        (BaseConsonant, 0x1044),
        (LowerConsonant, 0x1004),
        (Virama, 0x1039),
        (Visarga, 0x1038),
    ]),
    (0x105A, &[(VowelSignAa, 0x102C), (Virama, 0x1039)]),
    (0x1088, &[(MedialHa, 0x103D), (LowerVowelSign, 0x102F)]),
    (0x1089, &[(MedialHa, 0x103D), (LowerVowelSign, 0x1030)]),
    (0x108A, &[(MedialWa, 0x103C), (MedialHa, 0x103D)]),
    (0x108B, &[(Virama, 0x1064), (UpperVowelSign, 0x102D)]),
    (0x108C, &[(Virama, 0x1064), (UpperVowelSign, 0x102E)]),
    (0x108D, &[(Virama, 0x1064), (Anusvara, 0x1036)]),
    (0x108E, &[(UpperVowelSign, 0x102D), (Anusvara, 0x1036)]),
];

/// Slots filled by a legacy composite code, if it is one
pub fn decomposition(code: CharCode) -> Option<&'static [(SignCategory, CharCode)]> {
    DECOMPOSITIONS
        .iter()
        .find(|(composite, _)| *composite == code)
        .map(|(_, parts)| *parts)
}

/// Sign composition of the syllable being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Syllable {
    slots: [CharCode; WORD_LENGTH],
}

impl Syllable {
    /// Empty syllable (every slot holds the sentinel)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a syllable from explicit slot values, bypassing decomposition
    pub fn from_slots(slots: [CharCode; WORD_LENGTH]) -> Self {
        Self { slots }
    }

    /// Code stored for a category (`NULL_CHAR` when empty)
    pub fn get(&self, category: SignCategory) -> CharCode {
        self.slots[category.index()]
    }

    /// Store a code as-is
    pub fn set(&mut self, category: SignCategory, code: CharCode) {
        self.slots[category.index()] = code;
    }

    /// Empty one slot
    pub fn clear(&mut self, category: SignCategory) {
        self.set(category, NULL_CHAR);
    }

    /// Whether a category holds a code
    pub fn has(&self, category: SignCategory) -> bool {
        self.get(category) != NULL_CHAR
    }

    /// Whether a category holds any of the given codes
    pub fn is_any(&self, category: SignCategory, codes: &[CharCode]) -> bool {
        codes.contains(&self.get(category))
    }

    /// Whether either consonant slot is filled
    pub fn has_consonant(&self) -> bool {
        self.has(BaseConsonant) || self.has(DoubleStoryConsonant)
    }

    /// Whether every slot is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|&code| code == NULL_CHAR)
    }

    /// All slots in category order
    pub fn slots(&self) -> &[CharCode; WORD_LENGTH] {
        &self.slots
    }

    /// Return every slot to the sentinel
    pub fn reset(&mut self) {
        self.slots = [NULL_CHAR; WORD_LENGTH];
    }

    /// Record a classified code
    ///
    /// Legacy composites fill every slot listed in [`DECOMPOSITIONS`]
    /// regardless of `category`; anything else overwrites `category`.
    pub fn write(&mut self, category: SignCategory, code: CharCode) {
        match decomposition(code) {
            Some(parts) => {
                for &(part_category, part_code) in parts {
                    self.set(part_category, part_code);
                }
            }
            None => self.set(category, code),
        }
    }

    /// [`write`](Self::write) addressed by raw slot index
    pub fn write_index(&mut self, index: usize, code: CharCode) -> Result<(), CorrectionError> {
        let category = SignCategory::from_index(index).ok_or(CorrectionError::InvalidCategory(index))?;
        self.write(category, code);
        Ok(())
    }
}
