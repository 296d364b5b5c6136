// Copyright (c) 2025-2026 The Kaia Authors

//! Per-family field dispatch tables

use crate::tx::TxFamily;

use super::field::{Field as F, FieldEntry as E, FieldHandler as H};

/// Legacy (untyped) transactions
pub const LEGACY: &[E] = &[
    E::new(F::Nonce, H::Uint),
    E::new(F::GasPrice, H::Uint),
    E::new(F::GasLimit, H::Uint),
    E::new(F::To, H::Address),
    E::new(F::Value, H::Uint),
    E::new(F::Data, H::Data),
    E::new(F::ChainId, H::Uint),
    E::new(F::Zero1, H::Discard),
    E::new(F::Zero2, H::Discard),
];

pub const VALUE_TRANSFER: &[E] = &[
    E::new(F::Content, H::List),
    E::new(F::Type, H::TxType),
    E::new(F::Nonce, H::Uint),
    E::new(F::GasPrice, H::Uint),
    E::new(F::GasLimit, H::Uint),
    E::new(F::To, H::Address),
    E::new(F::Value, H::Uint),
    E::new(F::From, H::Discard),
    E::new(F::Ratio, H::Ratio),
    E::new(F::ChainId, H::Uint),
    E::new(F::Zero1, H::Discard),
    E::new(F::Zero2, H::Discard),
];

/// Value transfer with memo, memo is consumed as data
pub const VALUE_TRANSFER_MEMO: &[E] = &[
    E::new(F::Content, H::List),
    E::new(F::Type, H::TxType),
    E::new(F::Nonce, H::Uint),
    E::new(F::GasPrice, H::Uint),
    E::new(F::GasLimit, H::Uint),
    E::new(F::To, H::Address),
    E::new(F::Value, H::Uint),
    E::new(F::From, H::Discard),
    E::new(F::Data, H::Data),
    E::new(F::Ratio, H::Ratio),
    E::new(F::ChainId, H::Uint),
    E::new(F::Zero1, H::Discard),
    E::new(F::Zero2, H::Discard),
];

/// Contract deployment, the (empty) recipient is discarded
pub const SMART_CONTRACT_DEPLOY: &[E] = &[
    E::new(F::Content, H::List),
    E::new(F::Type, H::TxType),
    E::new(F::Nonce, H::Uint),
    E::new(F::GasPrice, H::Uint),
    E::new(F::GasLimit, H::Uint),
    E::new(F::To, H::Discard),
    E::new(F::Value, H::Uint),
    E::new(F::From, H::Discard),
    E::new(F::Data, H::Data),
    E::new(F::HumanReadable, H::Discard),
    E::new(F::Ratio, H::Ratio),
    E::new(F::CodeFormat, H::Discard),
    E::new(F::ChainId, H::Uint),
    E::new(F::Zero1, H::Discard),
    E::new(F::Zero2, H::Discard),
];

pub const SMART_CONTRACT_EXECUTION: &[E] = &[
    E::new(F::Content, H::List),
    E::new(F::Type, H::TxType),
    E::new(F::Nonce, H::Uint),
    E::new(F::GasPrice, H::Uint),
    E::new(F::GasLimit, H::Uint),
    E::new(F::To, H::Address),
    E::new(F::Value, H::Uint),
    E::new(F::From, H::Discard),
    E::new(F::Data, H::Data),
    E::new(F::Ratio, H::Ratio),
    E::new(F::ChainId, H::Uint),
    E::new(F::Zero1, H::Discard),
    E::new(F::Zero2, H::Discard),
];

pub const CANCEL: &[E] = &[
    E::new(F::Content, H::List),
    E::new(F::Type, H::TxType),
    E::new(F::Nonce, H::Uint),
    E::new(F::GasPrice, H::Uint),
    E::new(F::GasLimit, H::Uint),
    E::new(F::From, H::Discard),
    E::new(F::Ratio, H::Ratio),
    E::new(F::ChainId, H::Uint),
    E::new(F::Zero1, H::Discard),
    E::new(F::Zero2, H::Discard),
];

/// Fetch the field table for a transaction family
pub fn table(family: TxFamily) -> &'static [E] {
    match family {
        TxFamily::Legacy => LEGACY,
        TxFamily::ValueTransfer => VALUE_TRANSFER,
        TxFamily::ValueTransferMemo => VALUE_TRANSFER_MEMO,
        TxFamily::SmartContractDeploy => SMART_CONTRACT_DEPLOY,
        TxFamily::SmartContractExecution => SMART_CONTRACT_EXECUTION,
        TxFamily::Cancel => CANCEL,
    }
}
