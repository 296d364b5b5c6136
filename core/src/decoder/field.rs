// Copyright (c) 2025-2026 The Kaia Authors

use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::{
    rlp::Header,
    tx::{BigUnsigned, Transaction, ADDRESS_LEN, MAX_UINT_LEN},
};

use super::Error;

/// Transaction fields, in the order they may appear on the wire
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumString, Display, EnumVariantNames, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    /// Typed transaction content list
    Content,
    Type,
    Nonce,
    GasPrice,
    GasLimit,
    To,
    Value,
    From,
    Data,
    HumanReadable,
    /// Fee ratio (partial fee delegated types only)
    Ratio,
    CodeFormat,
    ChainId,
    /// Signature placeholders
    Zero1,
    Zero2,
}

/// Field handler, validates and consumes a single field
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum FieldHandler {
    /// Enter the typed content list, no payload is consumed
    List,
    /// Re-read the transaction type tag
    TxType,
    /// Copy a big-endian numeric value
    Uint,
    /// Copy a recipient address
    Address,
    /// Validate and drop the field payload
    Discard,
    /// Fee ratio, present only for partial fee delegated types
    Ratio,
    /// Drop contract / memo data, recording whether any is present
    Data,
}

/// Dispatch table entry
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FieldEntry {
    pub field: Field,
    pub handler: FieldHandler,
}

impl FieldEntry {
    pub const fn new(field: Field, handler: FieldHandler) -> Self {
        Self { field, handler }
    }
}

/// In-progress field, persisted between chunks
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FieldState {
    pub header: Header,
    pub pos: u32,
}

impl FieldState {
    /// Bytes of payload still to be consumed
    pub fn remaining(&self) -> usize {
        (self.header.len - self.pos) as usize
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.header.len
    }
}

impl FieldHandler {
    /// Check a decoded header matches the field kind and capacity
    pub fn check(&self, h: &Header) -> Result<(), Error> {
        // Only the content wrapper may be a list
        match (self, h.list) {
            (FieldHandler::List, false) => return Err(Error::UnexpectedString),
            (FieldHandler::List, true) => return Ok(()),
            (_, true) => return Err(Error::UnexpectedList),
            _ => (),
        }

        let max = match self {
            FieldHandler::TxType if h.len != 1 => return Err(Error::UnsupportedType),
            FieldHandler::TxType => 1,
            FieldHandler::Uint => MAX_UINT_LEN,
            FieldHandler::Address => ADDRESS_LEN,
            FieldHandler::Ratio => 1,
            _ => return Ok(()),
        };

        if h.len as usize > max {
            return Err(Error::FieldTooLong);
        }

        Ok(())
    }

    /// Whether the field payload is consumed (lists are entered, not skipped)
    pub fn consumes_payload(&self) -> bool {
        !matches!(self, FieldHandler::List)
    }

    /// Apply a (possibly partial) field payload to the transaction.
    ///
    /// `pos` is the offset of `data` within the field payload.
    pub fn apply(
        &self,
        field: Field,
        h: &Header,
        pos: usize,
        data: &[u8],
        tx: &mut Transaction,
    ) -> Result<(), Error> {
        match self {
            // The type tag is resolved when peeked, here it is only consumed
            FieldHandler::List | FieldHandler::Discard | FieldHandler::TxType => (),
            FieldHandler::Uint => {
                let v = uint_field(field, tx).ok_or(Error::InvalidState)?;
                v.extend(data).map_err(|_| Error::FieldTooLong)?;
            }
            FieldHandler::Address => {
                let end = pos + data.len();
                if end > ADDRESS_LEN {
                    return Err(Error::FieldTooLong);
                }
                tx.to[pos..end].copy_from_slice(data);
            }
            FieldHandler::Ratio => {
                if let Some(r) = data.first() {
                    tx.fee_ratio = *r;
                }
            }
            FieldHandler::Data => {
                // A lone zero byte is treated as empty data
                if pos == 0 && !data.is_empty() {
                    tx.data_present = !(h.len == 1 && data[0] == 0x00);
                }
            }
        }

        Ok(())
    }

    /// Prepare the transaction for a field once its header is decoded
    pub fn begin(&self, h: &Header, tx: &mut Transaction) {
        if let FieldHandler::Data = self {
            tx.data_present = h.len > 0;
        }
    }
}

/// Map numeric fields to their destination
fn uint_field(field: Field, tx: &mut Transaction) -> Option<&mut BigUnsigned> {
    let v = match field {
        Field::Nonce => &mut tx.nonce,
        Field::GasPrice => &mut tx.gas_price,
        Field::GasLimit => &mut tx.gas_limit,
        Field::Value => &mut tx.value,
        Field::ChainId => &mut tx.chain_id,
        _ => return None,
    };

    Some(v)
}
