//! Syllable serialization in canonical order

use super::category::{CharCode, SignCategory, NULL_CHAR, WORD_LENGTH};
use super::syllable::Syllable;

use SignCategory::*;

/// Whether the upper vowel sign moves behind the lower vowel sign
///
/// With a medial ya the upper vowel sign is drawn over the medial, so it
/// must follow it.
pub fn moves_upper_vowel(s: &Syllable) -> bool {
    s.has(MedialYa)
}

/// Whether the virama is emitted right after the medials
pub fn moves_virama_early(s: &Syllable) -> bool {
    let under_medial_ya = !s.has(PreBaseVowel) && s.has(MedialYa) && s.has(Virama);
    under_medial_ya || s.is_any(Virama, &[0x1064, 0x108D])
}

/// Category order for this syllable
///
/// Every category appears exactly once; only the upper vowel sign and the
/// virama change position.
pub fn emission_order(s: &Syllable) -> [SignCategory; WORD_LENGTH] {
    let upper_late = moves_upper_vowel(s);
    let virama_early = moves_virama_early(s);

    let mut order = Vec::with_capacity(WORD_LENGTH);
    order.extend([
        PreBaseVowel,
        MedialRa,
        BaseConsonant,
        DoubleStoryConsonant,
        LowerConsonant,
    ]);
    if !upper_late {
        order.push(UpperVowelSign);
    }
    order.extend([MedialHa, MedialWa, MedialYa]);
    if virama_early {
        order.push(Virama);
    }
    order.extend([Anusvara, LowerVowelSign]);
    if upper_late {
        order.push(UpperVowelSign);
    }
    order.extend([VowelSignAi, VowelSignAa]);
    if !virama_early {
        order.push(Virama);
    }
    order.extend([DotBelow, Visarga, Other]);

    let mut fixed = [Other; WORD_LENGTH];
    fixed.copy_from_slice(&order);
    fixed
}

/// Emit all 17 slots, empty ones included
pub fn serialize(s: &Syllable) -> [CharCode; WORD_LENGTH] {
    let mut out = [NULL_CHAR; WORD_LENGTH];
    for (slot, category) in out.iter_mut().zip(emission_order(s)) {
        *slot = s.get(category);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllable(parts: &[(SignCategory, CharCode)]) -> Syllable {
        let mut s = Syllable::new();
        for &(category, code) in parts {
            s.set(category, code);
        }
        s
    }

    #[test]
    fn test_default_order() {
        let order = emission_order(&Syllable::new());
        assert_eq!(
            order,
            [
                PreBaseVowel,
                MedialRa,
                BaseConsonant,
                DoubleStoryConsonant,
                LowerConsonant,
                UpperVowelSign,
                MedialHa,
                MedialWa,
                MedialYa,
                Anusvara,
                LowerVowelSign,
                VowelSignAi,
                VowelSignAa,
                Virama,
                DotBelow,
                Visarga,
                Other,
            ]
        );
    }

    #[test]
    fn test_every_category_once() {
        let samples = [
            Syllable::new(),
            syllable(&[(MedialYa, 0x103A)]),
            syllable(&[(Virama, 0x1064)]),
            syllable(&[(MedialYa, 0x103A), (Virama, 0x103A)]),
        ];
        for s in samples {
            let order = emission_order(&s);
            for category in SignCategory::ALL {
                assert_eq!(order.iter().filter(|&&c| c == category).count(), 1);
            }
        }
    }

    #[test]
    fn test_upper_vowel_follows_lower_vowel_under_medial_ya() {
        let s = syllable(&[
            (BaseConsonant, 0x1000),
            (UpperVowelSign, 0x102D),
            (MedialYa, 0x103A),
            (LowerVowelSign, 0x1033),
        ]);
        let out = serialize(&s);
        let upper = out.iter().position(|&c| c == 0x102D).unwrap();
        let lower = out.iter().position(|&c| c == 0x1033).unwrap();
        assert!(upper > lower);
        assert_eq!(out[10], 0x102D);
    }

    #[test]
    fn test_virama_early_for_kinzi() {
        let s = syllable(&[(BaseConsonant, 0x1000), (Virama, 0x1064), (VowelSignAa, 0x102C)]);
        let out = serialize(&s);
        assert_eq!(out[9], 0x1064);
        assert!(moves_virama_early(&s));

        let s = syllable(&[(BaseConsonant, 0x1000), (Virama, 0x108D)]);
        assert!(moves_virama_early(&s));
    }

    #[test]
    fn test_virama_early_under_medial_ya() {
        let s = syllable(&[(BaseConsonant, 0x1000), (MedialYa, 0x103A), (Virama, 0x103A)]);
        assert!(moves_virama_early(&s));

        // a pre-base vowel keeps it late
        let s = syllable(&[
            (PreBaseVowel, 0x1031),
            (BaseConsonant, 0x1000),
            (MedialYa, 0x103A),
            (Virama, 0x103A),
        ]);
        assert!(!moves_virama_early(&s));
        let out = serialize(&s);
        assert_eq!(out[13], 0x103A);
    }

    #[test]
    fn test_virama_late_by_default() {
        let s = syllable(&[(BaseConsonant, 0x1000), (VowelSignAa, 0x102C), (Virama, 0x103A)]);
        let out = serialize(&s);
        assert_eq!(&out[..3], &[NULL_CHAR, NULL_CHAR, 0x1000]);
        assert_eq!(out[12], 0x102C);
        assert_eq!(out[13], 0x103A);
    }

    #[test]
    fn test_empty_syllable_serializes_to_sentinels() {
        assert_eq!(serialize(&Syllable::new()), [NULL_CHAR; WORD_LENGTH]);
    }
}
