use std::error::Error;
use std::fmt;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SequenceSizeError {
    OutOfRange { size: usize },
}

impl fmt::Display for SequenceSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { size } => {
                write!(
                    f,
                    "sequence size must be between {} and {}, got {}",
                    MIN_SIZE, MAX_SIZE, size
                )
            }
        }
    }
}

impl Error for SequenceSizeError {}

/// Validated element count for randomly generated sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SequenceSize {
    size: usize,
}

impl SequenceSize {
    pub fn new(size: usize) -> Result<Self, SequenceSizeError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(SequenceSizeError::OutOfRange { size });
        }

        Ok(Self { size })
    }

    #[must_use]
    pub fn get(&self) -> usize {
        self.size
    }
}
