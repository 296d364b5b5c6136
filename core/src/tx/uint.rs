// Copyright (c) 2025-2026 The Kaia Authors

use heapless::Vec;

/// Maximum encoded length for numeric fields
pub const MAX_UINT_LEN: usize = 32;

/// Big-endian unsigned integer of up to 256 bits, as encoded on the wire.
///
/// Leading zero bytes are preserved so the value may be filled
/// incrementally as field payloads arrive across chunks.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BigUnsigned(Vec<u8, MAX_UINT_LEN>);

impl BigUnsigned {
    /// Create an empty (zero) value
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a value from big-endian bytes, `None` if over capacity
    pub fn from_slice(b: &[u8]) -> Option<Self> {
        Vec::from_slice(b).ok().map(Self)
    }

    /// Append payload bytes, fails where capacity would be exceeded
    pub(crate) fn extend(&mut self, b: &[u8]) -> Result<(), ()> {
        self.0.extend_from_slice(b)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to a u64, `None` if the value has more than 8 significant bytes
    pub fn to_u64(&self) -> Option<u64> {
        let b = significant(&self.0);
        if b.len() > 8 {
            return None;
        }

        Some(b.iter().fold(0u64, |a, v| (a << 8) | *v as u64))
    }
}

/// Strip leading zero bytes
fn significant(b: &[u8]) -> &[u8] {
    let i = b.iter().position(|v| *v != 0).unwrap_or(b.len());
    &b[i..]
}

impl AsRef<[u8]> for BigUnsigned {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for BigUnsigned {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl core::fmt::Display for BigUnsigned {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in &self.0[..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
