// Copyright (c) 2025-2026 The Kaia Authors

//! Kaia hardware wallet transaction decoder
//!
//! This provides a streaming [Decoder][decoder::Decoder] for RLP encoded
//! Kaia (and legacy Ethereum-style) transactions, for execution on
//! hardware wallets where transactions arrive in APDU sized chunks and
//! must be decoded without allocation.
//!
//! ## Operation
//!
//! 1. Create a [`Decoder`][decoder::Decoder] with the total transaction length,
//!    lengths over [`MAX_TX_LEN`][decoder::MAX_TX_LEN] are rejected
//! 2. Feed each chunk to [`Decoder::update`][decoder::Decoder::update], which returns
//!    [`Progress::NeedsMoreInput`][decoder::Progress::NeedsMoreInput] until the final
//!    field has been decoded
//! 3. Fetch the decoded [`Transaction`][tx::Transaction] via
//!    [`Decoder::finish`][decoder::Decoder::finish]
//!
//! Any error aborts decoding, the partially decoded transaction is never exposed.
//! [`Status`][decoder::Status] maps results to the statuses reported to callers.
//!
//! For inputs already in memory [`deserialize`][decoder::deserialize] performs
//! all three steps.
//!
//! ## Features
//!
//! - `std` enables `thiserror` derived error implementations
//! - `log` enables logging via the `log` facade
//! - `large_tx` raises the maximum transaction length from 510 to 8190 bytes
//! - `noinline` prevents inlining of large functions to reduce stack use
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod decoder;

pub mod rlp;

pub mod tx;

pub use decoder::{deserialize, Decoder, Error, Progress, Status};
pub use tx::{BigUnsigned, Transaction, TxType};
