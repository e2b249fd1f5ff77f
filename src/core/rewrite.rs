//! Context-sensitive glyph rewrite rules
//!
//! Each step reads sibling slots of the same syllable and replaces one
//! category's code with the glyph variant that renders correctly in that
//! context. Steps run in a fixed order; later steps rely on the output of
//! earlier ones (the lower vowel sign, for instance, only looks at medials
//! after they have been resolved), so the order in [`PIPELINE`] is part of
//! the contract.

use log::trace;

use super::category::{CharCode, SignCategory, NULL_CHAR};
use super::syllable::Syllable;

use SignCategory::*;

/// One named stage of the pipeline
#[derive(Clone, Copy)]
pub struct RewriteStep {
    pub name: &'static str,
    pub apply: fn(&mut Syllable),
}

/// Rewrite steps in execution order
pub const PIPELINE: [RewriteStep; 16] = [
    RewriteStep { name: "pre_base_vowel", apply: fix_pre_base_vowel },
    RewriteStep { name: "medial_ra", apply: fix_medial_ra },
    RewriteStep { name: "consonant", apply: fix_consonant },
    RewriteStep { name: "lower_consonant", apply: fix_lower_consonant },
    RewriteStep { name: "upper_vowel_sign", apply: fix_upper_vowel_sign },
    RewriteStep { name: "medial_ha", apply: fix_medial_ha },
    RewriteStep { name: "medial_wa", apply: fix_medial_wa },
    RewriteStep { name: "medial_ya", apply: fix_medial_ya },
    RewriteStep { name: "lower_vowel_sign", apply: fix_lower_vowel_sign },
    RewriteStep { name: "anusvara", apply: fix_anusvara },
    RewriteStep { name: "vowel_sign_ai", apply: fix_vowel_sign_ai },
    RewriteStep { name: "vowel_sign_aa", apply: fix_vowel_sign_aa },
    RewriteStep { name: "virama", apply: fix_virama },
    RewriteStep { name: "dot_below", apply: fix_dot_below },
    RewriteStep { name: "visarga", apply: fix_visarga },
    RewriteStep { name: "mix_char", apply: fix_mix_char },
];

/// Run the whole pipeline over a syllable
///
/// Syllables without a consonant are left untouched.
pub fn fix(syllable: &mut Syllable) {
    if !syllable.has_consonant() {
        return;
    }
    for step in PIPELINE.iter() {
        let before = *syllable;
        (step.apply)(syllable);
        if before != *syllable {
            trace!("{}: {:04X?} -> {:04X?}", step.name, before.slots(), syllable.slots());
        }
    }
}

/// Consonants whose descender collides with a short lower vowel sign
#[rustfmt::skip]
const TALL_CONSONANTS: &[CharCode] = &[
    0x1008, // ဈ
    0x100B, // ဋ
    0x100C, // ဌ
    0x100D, // ဍ
    0x1020, // ဠ
    0x104C, // ၌
    0x104D, // ၍
    0x1092, // ႒
    0x106E, // ၮ
    0x106F, // ၯ
    0x1097, // ႗
    // digits drawn with a descender
    0x1042, 0x1043, 0x1044, 0x1045, 0x1046, 0x1047, 0x1049,
];

/// Double-story consonants that need the long lower vowel sign
#[rustfmt::skip]
const TALL_DOUBLE_CONSONANTS: &[CharCode] = &[
    0x1023, // ဣ
    0x1024, // ဤ
    0x1029, // ဩ
    0x102A, // ဪ
    0x104E, // ၎
    0x1091, // ႑
];

/// Nya forms (ည ဉ ၫ) that extend below the baseline
const NYA_FORMS: &[CharCode] = &[0x100A, 0x1009, 0x106B];

/// Round consonants that take the tall aa sign
#[rustfmt::skip]
const ROUND_CONSONANTS: &[CharCode] = &[
    0x1001, // ခ
    0x1002, // ဂ
    0x1004, // င
    0x1012, // ဒ
    0x1015, // ပ
    0x101D, // ဝ
];

/// Slots that must be empty for the tall aa sign
const TALL_AA_BLOCKERS: [SignCategory; 7] = [
    MedialRa,
    LowerConsonant,
    UpperVowelSign,
    MedialHa,
    MedialWa,
    MedialYa,
    LowerVowelSign,
];

fn fix_pre_base_vowel(_syllable: &mut Syllable) {
    // ေ always keeps its code
}

fn fix_medial_ra(s: &mut Syllable) {
    if !s.has(MedialRa) {
        return;
    }

    let upper = s.has(UpperVowelSign)
        || s.has(VowelSignAi)
        || s.has(Anusvara)
        || s.is_any(Virama, &[0x1064, 0x108D]);
    let lower = s.has(MedialWa) || s.has(LowerConsonant);

    let code = if s.has(BaseConsonant) {
        match (upper, lower) {
            (true, true) => 0x1083,
            (true, false) => 0x107F,
            (false, true) => 0x1081,
            (false, false) => 0x103B,
        }
    } else {
        match (upper, lower) {
            (true, true) => 0x1084,
            (true, false) => 0x1080,
            (false, true) => 0x1082,
            (false, false) => 0x107E,
        }
    };
    s.set(MedialRa, code);
}

fn fix_consonant(s: &mut Syllable) {
    if !s.has_consonant() {
        return;
    }

    // ည
    if s.is_any(DoubleStoryConsonant, &[0x100A, 0x106B]) {
        let code = if s.has(MedialWa) || s.has(LowerConsonant) {
            0x106B
        } else {
            0x100A
        };
        s.set(DoubleStoryConsonant, code);
    }

    // န
    if s.is_any(BaseConsonant, &[0x1014, 0x108F]) {
        let short = s.has(MedialRa)
            || s.has(MedialWa)
            || s.has(MedialHa)
            || s.has(MedialYa)
            || s.has(LowerVowelSign)
            || s.has(LowerConsonant);
        s.set(BaseConsonant, if short { 0x108F } else { 0x1014 });
    }

    // ရ
    if s.is_any(BaseConsonant, &[0x101B, 0x1090]) {
        let code = if s.has(LowerVowelSign) { 0x1090 } else { 0x101B };
        s.set(BaseConsonant, code);
    }

    // ဥ
    if s.is_any(BaseConsonant, &[0x1025, 0x106A]) {
        let code = if s.has(MedialWa) || s.has(LowerConsonant) {
            0x106A
        } else {
            0x1025
        };
        s.set(BaseConsonant, code);
    }
}

fn fix_lower_consonant(s: &mut Syllable) {
    if !s.has(LowerConsonant) {
        return;
    }

    // (form under a double-story consonant, form under a plain one)
    const PAIRS: [(CharCode, CharCode); 4] = [
        (0x1066, 0x1067),
        (0x1071, 0x1072),
        (0x1073, 0x1074),
        (0x107B, 0x1093),
    ];

    let wide = s.has(DoubleStoryConsonant);
    for (wide_form, narrow_form) in PAIRS {
        if s.is_any(LowerConsonant, &[wide_form, narrow_form]) {
            s.set(LowerConsonant, if wide { wide_form } else { narrow_form });
        }
    }
}

fn fix_upper_vowel_sign(s: &mut Syllable) {
    if !s.has(UpperVowelSign) {
        return;
    }

    if s.get(Virama) == 0x1064 {
        // kinzi merges with the vowel sign
        let code = if s.get(UpperVowelSign) == 0x102D {
            0x108B
        } else {
            0x108C
        };
        s.set(UpperVowelSign, code);
        s.clear(Virama);
    } else if s.has(Anusvara) {
        s.set(UpperVowelSign, 0x108E);
        s.clear(Anusvara);
    } else if s.is_any(UpperVowelSign, &[0x102D, 0x108B, 0x108E]) {
        s.set(UpperVowelSign, 0x102D);
    } else if s.is_any(UpperVowelSign, &[0x102E, 0x108C]) {
        s.set(UpperVowelSign, 0x102E);
    }
}

fn fix_medial_ha(s: &mut Syllable) {
    if !s.has(MedialHa) {
        return;
    }

    let short = s.has(MedialRa)
        || s.is_any(DoubleStoryConsonant, &[0x100A, 0x1009, 0x106B, 0x1029, 0x102A])
        || s.get(BaseConsonant) == 0x100C;
    s.set(MedialHa, if short { 0x1087 } else { 0x103D });
}

fn fix_medial_wa(s: &mut Syllable) {
    if !s.has(MedialWa) {
        return;
    }

    if s.has(MedialHa) {
        s.set(MedialWa, 0x108A);
        s.clear(MedialHa);
    } else {
        s.set(MedialWa, 0x103C);
    }
}

fn fix_medial_ya(s: &mut Syllable) {
    if !s.has(MedialYa) {
        return;
    }

    let code = if s.has(MedialWa) { 0x107D } else { 0x103A };
    s.set(MedialYa, code);
}

/// Whether the lower vowel sign has to use its long form
fn needs_long_vowel(s: &Syllable) -> bool {
    s.has(MedialRa)
        || s.has(MedialYa)
        || s.has(MedialWa)
        || s.has(LowerConsonant)
        || s.is_any(BaseConsonant, TALL_CONSONANTS)
        // ဥ ဦ
        || s.is_any(BaseConsonant, &[0x1025, 0x1026, 0x106A])
        || s.is_any(DoubleStoryConsonant, NYA_FORMS)
        || s.is_any(DoubleStoryConsonant, TALL_DOUBLE_CONSONANTS)
}

fn fix_lower_vowel_sign(s: &mut Syllable) {
    if !s.has(LowerVowelSign) {
        return;
    }

    // (short, long, merged with medial ha)
    let (short, long, with_ha) = if s.is_any(LowerVowelSign, &[0x102F, 0x1033]) {
        (0x102F, 0x1033, 0x1088)
    } else {
        (0x1030, 0x1034, 0x1089)
    };

    if needs_long_vowel(s) {
        s.set(LowerVowelSign, long);
    } else if s.has(MedialHa) {
        s.set(LowerVowelSign, with_ha);
        s.clear(MedialHa);
    } else {
        s.set(LowerVowelSign, short);
    }
}

fn fix_anusvara(_syllable: &mut Syllable) {
    // ံ always keeps its code
}

fn fix_vowel_sign_ai(_syllable: &mut Syllable) {
    // ဲ always keeps its code
}

fn fix_vowel_sign_aa(s: &mut Syllable) {
    if !s.has(VowelSignAa) {
        return;
    }

    let tall = s.is_any(BaseConsonant, ROUND_CONSONANTS)
        && TALL_AA_BLOCKERS.iter().all(|&category| !s.has(category));

    if !tall {
        s.set(VowelSignAa, 0x102C);
    } else if s.get(Virama) == 0x1039 {
        s.set(VowelSignAa, 0x105A);
        s.clear(Virama);
    } else {
        s.set(VowelSignAa, 0x102B);
    }
}

fn fix_virama(s: &mut Syllable) {
    if s.get(Virama) == 0x1064 && s.has(Anusvara) {
        s.set(Virama, 0x108D);
        s.clear(Anusvara);
    }
}

fn fix_dot_below(s: &mut Syllable) {
    if !s.has(DotBelow) {
        return;
    }

    let no_aa = !s.has(VowelSignAa);
    let vowel = s.get(LowerVowelSign);

    let shifted_left = no_aa
        && (s.has(MedialRa)
            || s.has(MedialWa)
            || s.has(MedialYa)
            || (vowel != NULL_CHAR && vowel != 0x102F)
            || s.has(LowerConsonant)
            || s.is_any(BaseConsonant, TALL_CONSONANTS)
            // ရ ႐
            || s.is_any(BaseConsonant, &[0x101B, 0x1090])
            || s.is_any(DoubleStoryConsonant, TALL_DOUBLE_CONSONANTS));
    let shifted_right =
        no_aa && (s.has(MedialHa) || vowel == 0x102F || s.get(BaseConsonant) == 0x1014);

    let code = if shifted_left {
        0x1095
    } else if shifted_right {
        0x1094
    } else {
        0x1037
    };
    s.set(DotBelow, code);
}

fn fix_visarga(_syllable: &mut Syllable) {
    // း always keeps its code
}

/// Fold corrected sign combinations back into single legacy glyphs
fn fix_mix_char(s: &mut Syllable) {
    // ၮ ၯ ႗
    for (base, lower) in [(0x100D, 0x106E), (0x100E, 0x106F), (0x100B, 0x1097)] {
        if s.get(BaseConsonant) == base && s.get(LowerConsonant) == lower {
            s.set(BaseConsonant, lower);
            s.clear(LowerConsonant);
        }
    }

    // ဪ
    if s.get(PreBaseVowel) == 0x1031
        && s.get(MedialRa) == 0x107E
        && s.get(DoubleStoryConsonant) == 0x101E
        && s.get(VowelSignAa) == 0x102C
        && s.get(Virama) == 0x1039
    {
        s.clear(PreBaseVowel);
        s.clear(MedialRa);
        s.set(DoubleStoryConsonant, 0x102A);
        s.clear(VowelSignAa);
        s.clear(Virama);
    }

    // ဩ
    if s.get(MedialRa) == 0x107E && s.get(DoubleStoryConsonant) == 0x101E {
        s.clear(MedialRa);
        s.set(DoubleStoryConsonant, 0x1029);
    }

    // ဦ
    if s.get(UpperVowelSign) == 0x102E && s.get(BaseConsonant) == 0x1025 {
        s.clear(UpperVowelSign);
        s.set(BaseConsonant, 0x1026);
    }

    // ၎
    if s.get(BaseConsonant) == 0x1044
        && s.get(LowerConsonant) == 0x1004
        && s.get(Virama) == 0x1039
        && s.get(Visarga) == 0x1038
    {
        s.set(BaseConsonant, 0x104E);
        s.clear(LowerConsonant);
        s.clear(Virama);
        s.clear(Visarga);
    }

    // ဈ
    if s.get(BaseConsonant) == 0x1005 && s.get(MedialYa) == 0x103A {
        s.set(BaseConsonant, 0x1008);
        s.clear(MedialYa);
    }
}
