// Copyright (c) 2025-2026 The Kaia Authors

//! Transaction types and the decoded transaction record

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

mod uint;
pub use uint::{BigUnsigned, MAX_UINT_LEN};

/// Address length in bytes
pub const ADDRESS_LEN: usize = 20;

/// Mask selecting the fee payer class from a type discriminant
const FEE_PAYER_MASK: u8 = 0x07;

/// Kaia transaction type discriminant
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    TryFromPrimitive,
    EnumString,
    Display,
    EnumVariantNames,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum TxType {
    /// Untyped (pre-Kaia) transaction, detected from envelope shape
    Legacy = 0x00,

    ValueTransfer = 0x08,
    FeeDelegatedValueTransfer = 0x09,
    PartialFeeDelegatedValueTransfer = 0x0a,

    ValueTransferMemo = 0x10,
    FeeDelegatedValueTransferMemo = 0x11,
    PartialFeeDelegatedValueTransferMemo = 0x12,

    SmartContractDeploy = 0x28,
    FeeDelegatedSmartContractDeploy = 0x29,
    PartialFeeDelegatedSmartContractDeploy = 0x2a,

    SmartContractExecution = 0x30,
    FeeDelegatedSmartContractExecution = 0x31,
    PartialFeeDelegatedSmartContractExecution = 0x32,

    Cancel = 0x38,
    FeeDelegatedCancel = 0x39,
    PartialFeeDelegatedCancel = 0x3a,
}

/// Transaction family, selects the field layout
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
pub enum TxFamily {
    Legacy,
    ValueTransfer,
    ValueTransferMemo,
    SmartContractDeploy,
    SmartContractExecution,
    Cancel,
}

/// Fee payer class, carried in the low bits of the type discriminant
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, TryFromPrimitive, EnumString, Display, EnumVariantNames,
)]
#[repr(u8)]
pub enum FeePayer {
    Basic = 0,
    FeeDelegated = 1,
    PartialFeeDelegated = 2,
}

impl Default for TxType {
    fn default() -> Self {
        Self::Legacy
    }
}

impl TxType {
    /// Resolve a typed (wrapped) transaction discriminant.
    ///
    /// Legacy transactions carry no discriminant so `0x00` is rejected.
    pub fn from_typed(v: u8) -> Option<Self> {
        match Self::try_from(v) {
            Ok(Self::Legacy) | Err(_) => None,
            Ok(t) => Some(t),
        }
    }

    /// Fetch the transaction family for this type
    pub fn family(&self) -> TxFamily {
        use TxType::*;

        match self {
            Legacy => TxFamily::Legacy,
            ValueTransfer | FeeDelegatedValueTransfer | PartialFeeDelegatedValueTransfer => {
                TxFamily::ValueTransfer
            }
            ValueTransferMemo
            | FeeDelegatedValueTransferMemo
            | PartialFeeDelegatedValueTransferMemo => TxFamily::ValueTransferMemo,
            SmartContractDeploy
            | FeeDelegatedSmartContractDeploy
            | PartialFeeDelegatedSmartContractDeploy => TxFamily::SmartContractDeploy,
            SmartContractExecution
            | FeeDelegatedSmartContractExecution
            | PartialFeeDelegatedSmartContractExecution => TxFamily::SmartContractExecution,
            Cancel | FeeDelegatedCancel | PartialFeeDelegatedCancel => TxFamily::Cancel,
        }
    }

    /// Fetch the fee payer class for this type
    pub fn fee_payer(&self) -> FeePayer {
        // Every defined discriminant has a low-bit class of 0..=2
        FeePayer::try_from(*self as u8 & FEE_PAYER_MASK).unwrap_or(FeePayer::Basic)
    }
}

/// Decoded transaction record
///
/// Fields not retained by the decoder (`from`, contract data, code
/// format etc.) are validated and discarded.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Transaction {
    pub tx_type: TxType,
    pub nonce: BigUnsigned,
    pub gas_price: BigUnsigned,
    pub gas_limit: BigUnsigned,
    pub value: BigUnsigned,
    /// Chain id, empty for pre-EIP-155 legacy transactions
    pub chain_id: BigUnsigned,
    /// Recipient, zeroed for types without one
    pub to: [u8; ADDRESS_LEN],
    /// Fee ratio, only set for partial fee delegated types
    pub fee_ratio: u8,
    /// Contract / memo data is present and non-zero
    pub data_present: bool,
}
