// Copyright (c) 2025-2026 The Kaia Authors

use super::{Progress, Status};

/// [Decoder][super::Decoder] errors
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// Declared transaction length exceeds the supported maximum, or input overruns it
    #[cfg_attr(feature = "thiserror", error("Invalid transaction length"))]
    InvalidLength = 0x00,

    /// Unsupported RLP prefix or length-of-length
    #[cfg_attr(feature = "thiserror", error("Invalid RLP header"))]
    InvalidHeader = 0x01,

    /// Header scratch buffer overflow
    #[cfg_attr(feature = "thiserror", error("RLP header overflow"))]
    HeaderOverflow = 0x02,

    /// List found where a string is required
    #[cfg_attr(feature = "thiserror", error("unexpected RLP list"))]
    UnexpectedList = 0x03,

    /// String found where a list is required
    #[cfg_attr(feature = "thiserror", error("unexpected RLP string"))]
    UnexpectedString = 0x04,

    /// Field exceeds the capacity of its destination
    #[cfg_attr(feature = "thiserror", error("field length exceeds maximum"))]
    FieldTooLong = 0x05,

    /// Unknown or unsupported transaction type
    #[cfg_attr(feature = "thiserror", error("unsupported transaction type"))]
    UnsupportedType = 0x06,

    /// Typed content length does not match encoded fields
    #[cfg_attr(feature = "thiserror", error("transaction content length mismatch"))]
    ContentLength = 0x07,

    /// Transaction not yet complete
    #[cfg_attr(feature = "thiserror", error("transaction incomplete"))]
    Incomplete = 0x08,

    /// Invalid decoder state
    #[cfg_attr(feature = "thiserror", error("invalid decoder state"))]
    InvalidState = 0x0a,
}

impl Error {
    /// Map an error to the caller-facing [Status]
    pub fn status(&self) -> Status {
        match self {
            Error::InvalidLength => Status::LengthError,
            Error::Incomplete => Status::NeedsMoreInput,
            _ => Status::StructuralError,
        }
    }
}

impl From<&Result<Progress, Error>> for Status {
    fn from(r: &Result<Progress, Error>) -> Self {
        match r {
            Ok(Progress::Complete) => Status::Ok,
            Ok(Progress::NeedsMoreInput) => Status::NeedsMoreInput,
            Err(e) => e.status(),
        }
    }
}
