//! Syllable boundary detection and output assembly
//!
//! Raw codes are classified one by one and collected into a [`Syllable`].
//! A syllable ends when it already holds a consonant and the next code can
//! only start a new one; it is then rewritten, serialized and appended to
//! the output.

use log::{debug, trace};

use super::category::{classify, CharCode, SignCategory, NULL_CHAR, WORD_LENGTH};
use super::rewrite::fix;
use super::serializer::serialize;
use super::syllable::Syllable;
use crate::error::CorrectionError;

/// Fewest codes that can form a correctable syllable
pub const MIN_INPUT_LEN: usize = 2;

/// Corrected code stream
///
/// Fixed-width: every syllable contributes 17 codes, empty slots included.
/// Pass-through codes sit between the syllable blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSequence {
    codes: Vec<CharCode>,
    /// `true` for codes that came out of a syllable block
    in_syllable: Vec<bool>,
}

impl OutputSequence {
    pub fn as_slice(&self) -> &[CharCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn into_vec(self) -> Vec<CharCode> {
        self.codes
    }

    /// Codes followed by the `0` terminator the host expects
    pub fn to_terminated(&self) -> Vec<CharCode> {
        let mut codes = Vec::with_capacity(self.codes.len() + 1);
        codes.extend_from_slice(&self.codes);
        codes.push(NULL_CHAR);
        codes
    }

    /// Codes with the empty syllable slots dropped
    ///
    /// A `0` that was passed through from the input is kept.
    pub fn compact(&self) -> Vec<CharCode> {
        self.codes
            .iter()
            .zip(&self.in_syllable)
            .filter(|&(&code, &in_syllable)| !(in_syllable && code == NULL_CHAR))
            .map(|(&code, _)| code)
            .collect()
    }
}

/// Worst-case output length for `input_len` codes
///
/// Each code can close a syllable (17 codes) and pass itself through, and
/// the last syllable is always flushed.
pub fn required_capacity(input_len: usize) -> usize {
    input_len * (WORD_LENGTH + 1) + WORD_LENGTH
}

/// Collects codes into syllables and accumulates the corrected output
struct SyllableAssembler {
    syllable: Syllable,
    output: Vec<CharCode>,
    in_syllable: Vec<bool>,
}

impl SyllableAssembler {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            syllable: Syllable::new(),
            output: Vec::with_capacity(capacity),
            in_syllable: Vec::with_capacity(capacity),
        }
    }

    fn feed(&mut self, code: i32) {
        let category = classify(code);

        if self.syllable.has_consonant() && category.is_syllable_initial() {
            self.flush();
        }

        if category == SignCategory::Other {
            // passed through as the host's 16-bit code unit
            if !(0..=0xFFFF).contains(&code) {
                debug!("code {:#X} truncated to {:#06X}", code, code as CharCode);
            }
            self.output.push(code as CharCode);
            self.in_syllable.push(false);
        } else {
            // classified codes all lie in the Myanmar blocks
            self.syllable.write(category, code as CharCode);
        }
    }

    /// Rewrite, serialize and reset the current syllable
    fn flush(&mut self) {
        fix(&mut self.syllable);
        let codes = serialize(&self.syllable);
        trace!("syllable {:04X?}", codes);
        self.output.extend_from_slice(&codes);
        self.in_syllable.extend_from_slice(&[true; WORD_LENGTH]);
        self.syllable.reset();
    }

    fn finish(mut self) -> OutputSequence {
        self.flush();
        OutputSequence {
            codes: self.output,
            in_syllable: self.in_syllable,
        }
    }
}

/// Correct a sequence of raw input codes
///
/// Inputs shorter than [`MIN_INPUT_LEN`] need no correction and yield an
/// empty sequence. Pass-through codes outside `0..=0xFFFF` are cut to their
/// low 16 bits, like any other UTF-16 host would store them.
pub fn process(input: &[i32]) -> OutputSequence {
    if input.len() < MIN_INPUT_LEN {
        debug!("skipping correction of {} code(s)", input.len());
        return OutputSequence::default();
    }

    let mut assembler = SyllableAssembler::with_capacity(input.len() + WORD_LENGTH);
    for &code in input {
        assembler.feed(code);
    }
    let output = assembler.finish();
    debug!("corrected {} code(s) into {}", input.len(), output.len());
    output
}

/// Correct into a caller-provided buffer
///
/// Writes the output followed by the `0` terminator and returns the number
/// of codes before the terminator. The buffer only has to hold the actual
/// output plus the terminator; a buffer of [`required_capacity`] plus one always
/// does. It is checked before anything is written.
pub fn process_into(input: &[i32], out: &mut [CharCode]) -> Result<usize, CorrectionError> {
    let output = process(input);
    let needed = output.len() + 1;
    if out.len() < needed {
        return Err(CorrectionError::OutputTooSmall {
            needed,
            available: out.len(),
        });
    }

    out[..output.len()].copy_from_slice(output.as_slice());
    out[output.len()] = NULL_CHAR;
    Ok(output.len())
}
