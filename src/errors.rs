use thiserror::Error;

use crate::domain::TicketStatus;

/// Error type covering the calculator's failure modes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("illegal transition: {from} -> {to}")]
    IllegalTransition {
        from: TicketStatus,
        to: TicketStatus,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
