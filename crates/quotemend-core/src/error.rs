// crates/quotemend-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepairError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    /// An opening guard with no closing guard before end of input.
    #[error(
        "unterminated guarded span: opened at offset {opened_at}, scan stalled at {stalled_at} (total {total_length})"
    )]
    UnterminatedGuard {
        opened_at: usize,
        stalled_at: usize,
        total_length: usize,
    },

    /// Scan cursor moved past the end of the buffer. Internal defect.
    #[error("scan cursor overrun: position {position} > total {total_length}")]
    CursorOverrun {
        position: usize,
        total_length: usize,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

impl RepairError {
    /// Offset of the malformed region, if the error points into the input.
    pub fn offset(&self) -> Option<usize> {
        match self {
            RepairError::UnterminatedGuard { opened_at, .. } => Some(*opened_at),
            RepairError::CursorOverrun { position, .. } => Some(*position),
            RepairError::Validation(_) => None,
        }
    }
}
