// Copyright (c) 2025-2026 The Kaia Authors

//! Chunked transaction decoding, mirroring APDU transport framing

use log::{debug, error};

use ledger_kaia_core::{decoder::Progress, Decoder, Transaction};

use crate::Error;

/// Maximum chunk length accepted by a single APDU
pub const MAX_CHUNK_LEN: usize = 255;

/// Feed an encoded transaction to a fresh [Decoder] in `chunk_size` pieces
pub fn decode_chunked(raw: &[u8], chunk_size: usize) -> Result<Transaction, Error> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_LEN {
        return Err(Error::InvalidChunkSize(chunk_size));
    }

    let mut d = Decoder::new(raw.len())?;
    let mut p = Progress::NeedsMoreInput;
    let mut consumed = 0;

    for (i, c) in raw.chunks(chunk_size).enumerate() {
        consumed += c.len();

        p = d.update(c).map_err(|e| {
            error!("Chunk {} rejected at offset {}: {}", i, consumed - c.len(), e);
            e
        })?;

        debug!("Chunk {} ({} bytes): {} (state: {})", i, c.len(), p, d.state());
    }

    match p {
        Progress::Complete => Ok(d.finish()?),
        Progress::NeedsMoreInput => Err(Error::Incomplete {
            consumed,
            total: raw.len(),
        }),
    }
}
