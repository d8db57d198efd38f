//! Error type shared by the translator and the transmitter

use core::fmt;

use crate::hal::HalError;
use crate::types::{Grapheme, MorsePattern, Script};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MorseError {
    /// Character has no entry in the effective dictionary
    LookupFailure { ch: char },
    /// Output line failed during transmission
    OutputFault(HalError),
    /// Transmission aborted by the caller's cancellation token
    Cancelled,
    /// Transmission would run past the configured timeout
    TimedOut { limit_ms: u64 },
    /// Two graphemes of one effective dictionary share a pattern
    DuplicatePattern { script: Script, pattern: MorsePattern },
    /// Grapheme listed twice in one effective dictionary
    DuplicateGrapheme { script: Script, grapheme: Grapheme },
    /// Table entry is not a valid dot/dash sequence
    InvalidPattern { script: Script, grapheme: Grapheme },
    /// Effective dictionary exceeds its fixed capacity
    TableFull { script: Script },
    /// Output writer rejected a token (fixed-capacity buffer full)
    BufferFull,
    /// Configuration value out of range
    InvalidConfig(&'static str),
}

impl fmt::Display for MorseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorseError::LookupFailure { ch } => {
                write!(f, "No Morse pattern for {:?} (U+{:04X})", ch, *ch as u32)
            }
            MorseError::OutputFault(e) => write!(f, "Output line fault: {}", e),
            MorseError::Cancelled => write!(f, "Transmission cancelled"),
            MorseError::TimedOut { limit_ms } => {
                write!(f, "Transmission exceeds timeout of {}ms", limit_ms)
            }
            MorseError::DuplicatePattern { script, pattern } => {
                write!(f, "Duplicate pattern \"{}\" in {} dictionary", pattern, script)
            }
            MorseError::DuplicateGrapheme { script, grapheme } => {
                write!(f, "Duplicate entry {} in {} dictionary", grapheme.label(), script)
            }
            MorseError::InvalidPattern { script, grapheme } => {
                write!(f, "Invalid pattern for {} in {} table", grapheme.label(), script)
            }
            MorseError::TableFull { script } => write!(f, "{} dictionary is full", script),
            MorseError::BufferFull => write!(f, "Output buffer full"),
            MorseError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MorseError {}

impl From<HalError> for MorseError {
    fn from(e: HalError) -> Self {
        MorseError::OutputFault(e)
    }
}
