pub mod config;
pub mod core;
pub mod error;

pub use config::CorrectionConfig;
pub use self::core::category::{classify, contains_my_char, is_alphabet, is_my_char, CharCode, SignCategory};
pub use self::core::converter::{correct_text, jelly_bean_fix, word_correction};
pub use self::core::driver::{process, process_into, required_capacity, OutputSequence};
pub use self::core::normalize::{is_char_equal, normal_form};
pub use self::core::syllable::Syllable;
pub use error::CorrectionError;
