use thiserror::Error;

/// Errors raised by ledger operations on malformed input.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid node address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },
}

/// Reasons a peer's chain could not be fetched. Never fatal to a resolution pass.
#[derive(Error, Debug)]
pub enum PeerError {
    #[error("request to peer failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("peer answered with status {0}")]
    Status(u16),

    #[error("peer reported length {reported} but sent {actual} blocks")]
    LengthMismatch { reported: usize, actual: usize },
}
