// Copyright (c) 2025-2026 The Kaia Authors

use ledger_kaia_core::decoder::Error as DecodeError;

/// Kaia decoding library Error Type
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Invalid hex input
    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Transaction decoding failed
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// Input exhausted before the transaction was complete
    #[error("Incomplete transaction ({consumed} of {total} bytes)")]
    Incomplete { consumed: usize, total: usize },

    /// Chunk size outside of the supported range
    #[error("Invalid chunk size {0} (expected 1..={max})", max = crate::MAX_CHUNK_LEN)]
    InvalidChunkSize(usize),
}
