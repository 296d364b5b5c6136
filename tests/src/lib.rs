// Copyright (c) 2025-2026 The Kaia Authors

//! Common transaction vectors for Kaia wallet decoders.
//!
//! Shared between the `core` and `lib` test suites, and exported
//! via the `ledger-kaia-tests` utility for use with other decoders.
//!


pub use transaction::{MalformedExpectation, TransactionExpectation, MALFORMED, TRANSACTIONS};

/// Find a known-good vector by name
pub fn find(name: &str) -> Option<&'static TransactionExpectation<'static>> {
    TRANSACTIONS.iter().find(|t| t.name == name)
}
