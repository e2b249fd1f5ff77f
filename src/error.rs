//! Correction errors

/// Errors raised at the host-facing edges of the engine
///
/// Under-length input is not an error; it simply yields no correction.
#[derive(Debug)]
pub enum CorrectionError {
    /// Slot index outside the 17 categories
    InvalidCategory(usize),
    /// Caller-provided output buffer cannot hold the worst-case output
    OutputTooSmall { needed: usize, available: usize },
    /// Config file read/write failure
    Io(std::io::Error),
    /// Config file (de)serialization failure
    Config(String),
}

impl std::fmt::Display for CorrectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrectionError::InvalidCategory(index) => {
                write!(f, "invalid category index: {}", index)
            }
            CorrectionError::OutputTooSmall { needed, available } => write!(
                f,
                "output buffer too small: need {} codes, have {}",
                needed, available
            ),
            CorrectionError::Io(e) => write!(f, "config io error: {}", e),
            CorrectionError::Config(s) => write!(f, "config format error: {}", s),
        }
    }
}

impl std::error::Error for CorrectionError {}

impl From<std::io::Error> for CorrectionError {
    fn from(e: std::io::Error) -> Self {
        CorrectionError::Io(e)
    }
}
