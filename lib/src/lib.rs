// Copyright (c) 2025-2026 The Kaia Authors

//! Kaia transaction decoding library (and CLI)
//!
//! Host-side helpers wrapping the streaming [`ledger_kaia_core`] decoder.
//! Transactions are fed to the decoder in APDU-sized chunks as they
//! would be when streamed to a device, and decoded fields are exposed
//! via a serialisable [`TxSummary`].
//!

/// Re-export `ledger-kaia-core` for consumers
pub use ledger_kaia_core::{self as kaia_core};

mod error;
pub use error::Error;

pub mod chunk;
pub use chunk::{decode_chunked, MAX_CHUNK_LEN};

pub mod summary;
pub use summary::TxSummary;

/// Decode a hex encoded transaction using the provided chunk size
pub fn decode_hex(s: &str, chunk_size: usize) -> Result<TxSummary, Error> {
    let raw = hex::decode(s.trim().trim_start_matches("0x"))?;

    let tx = decode_chunked(&raw, chunk_size)?;

    Ok(TxSummary::from(&tx))
}
