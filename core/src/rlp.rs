// Copyright (c) 2025-2026 The Kaia Authors

//! RLP header decoding and incremental header reading.
//!
//! Headers may be split across input chunks, [HeaderReader] accumulates
//! header bytes in a fixed scratch buffer until [can_decode] reports a
//! complete header, then hands back a decoded [Header].

use byteorder::{BigEndian, ByteOrder};

use crate::decoder::Error;

/// Maximum encoded header length (prefix and up to four length bytes)
pub const MAX_HEADER_LEN: usize = 5;

/// Maximum supported length-of-length
const MAX_LEN_OF_LEN: usize = 4;

/// Decoded RLP item header
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Header {
    /// Payload length in bytes
    pub len: u32,
    /// Item is a list
    pub list: bool,
    /// Encoded header length, zero for self-encoded single bytes
    pub offset: usize,
}

impl Header {
    /// Header describes a self-encoded single byte (the prefix _is_ the payload)
    pub fn is_single(&self) -> bool {
        self.offset == 0
    }
}

/// Number of length bytes following a prefix, zero for short forms
fn len_of_len(prefix: u8) -> usize {
    match prefix {
        0xb8..=0xbf => (prefix - 0xb7) as usize,
        0xf8..=0xff => (prefix - 0xf7) as usize,
        _ => 0,
    }
}

/// Check whether `buff` holds enough bytes to decode a header.
///
/// Returns an error where the prefix declares an unsupported (> 4 byte)
/// length-of-length, as no amount of further input could make it valid.
pub fn can_decode(buff: &[u8]) -> Result<bool, Error> {
    let prefix = match buff.first() {
        Some(p) => *p,
        None => return Ok(false),
    };

    let n = len_of_len(prefix);
    if n > MAX_LEN_OF_LEN {
        return Err(Error::InvalidHeader);
    }

    Ok(buff.len() > n)
}

/// Decode an RLP header from the start of `buff`
pub fn decode_header(buff: &[u8]) -> Result<Header, Error> {
    let prefix = match buff.first() {
        Some(p) => *p,
        None => return Err(Error::InvalidHeader),
    };

    let h = match prefix {
        0x00..=0x7f => Header {
            len: 1,
            list: false,
            offset: 0,
        },
        0x80..=0xb7 => Header {
            len: (prefix - 0x80) as u32,
            list: false,
            offset: 1,
        },
        0xb8..=0xbb => decode_long(buff, false)?,
        0xc0..=0xf7 => Header {
            len: (prefix - 0xc0) as u32,
            list: true,
            offset: 1,
        },
        0xf8..=0xfb => decode_long(buff, true)?,
        _ => return Err(Error::InvalidHeader),
    };

    Ok(h)
}

/// Decode a long-form header (big-endian length following the prefix)
fn decode_long(buff: &[u8], list: bool) -> Result<Header, Error> {
    let n = len_of_len(buff[0]);
    if buff.len() < 1 + n {
        return Err(Error::InvalidHeader);
    }

    let len = BigEndian::read_uint(&buff[1..][..n], n) as u32;

    Ok(Header {
        len,
        list,
        offset: 1 + n,
    })
}

/// Read cursor over a single input chunk
#[derive(Debug)]
pub struct Cursor<'a> {
    buff: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buff: &'a [u8]) -> Self {
        Self { buff, pos: 0 }
    }

    /// Bytes consumed from this chunk
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buff.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fetch the next byte without consuming it
    pub fn peek(&self) -> Option<u8> {
        self.buff.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume up to `n` bytes, returning fewer if the chunk runs out
    pub fn take(&mut self, n: usize) -> &'a [u8] {
        let n = n.min(self.remaining());
        let d = &self.buff[self.pos..][..n];
        self.pos += n;
        d
    }

    /// Step back over bytes consumed from _this_ chunk
    pub fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }
}

/// Resumable header reader, persists partial headers between chunks
#[derive(Clone, PartialEq, Debug, Default)]
pub struct HeaderReader {
    buff: [u8; MAX_HEADER_LEN],
    len: usize,
}

impl HeaderReader {
    /// Feed bytes from the cursor until a header can be decoded.
    ///
    /// Returns `Ok(None)` when the chunk is exhausted first, the bytes
    /// read so far are retained for the next call. Self-encoded single
    /// bytes are pushed back onto the cursor so they may be read as payload.
    pub fn read(&mut self, c: &mut Cursor) -> Result<Option<Header>, Error> {
        while !can_decode(&self.buff[..self.len])? {
            let b = match c.read_u8() {
                Some(b) => b,
                None => return Ok(None),
            };

            if self.len >= MAX_HEADER_LEN {
                return Err(Error::HeaderOverflow);
            }

            self.buff[self.len] = b;
            self.len += 1;
        }

        let h = decode_header(&self.buff[..self.len])?;
        self.len = 0;

        if h.is_single() {
            c.rewind(1);
        }

        Ok(Some(h))
    }

    /// Check whether a partial header is pending
    pub fn is_pending(&self) -> bool {
        self.len > 0
    }
}
