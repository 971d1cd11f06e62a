use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DeckError {
    /// The cursor was asked to move past the last card.
    OutOfRange { index: usize, len: usize },
    /// There is no current card because the deck is exhausted.
    NotAvailable { index: usize },
    InvalidOption { name: &'static str, reason: String },
    /// Two cards share a key.
    DuplicateKey { index: usize, key: String },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::OutOfRange { index, len } => {
                write!(f, "cannot advance past card {index} of {len}")
            }
            DeckError::NotAvailable { index } => {
                write!(f, "no card at position {index}: deck is exhausted")
            }
            DeckError::InvalidOption { name, reason } => {
                write!(f, "invalid deck option `{name}`: {reason}")
            }
            DeckError::DuplicateKey { index, key } => {
                write!(f, "card {index} reuses key {key}")
            }
        }
    }
}

impl std::error::Error for DeckError {}
