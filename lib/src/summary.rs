// Copyright (c) 2025-2026 The Kaia Authors

//! Serialisable transaction summary for display and export

use serde::{Deserialize, Serialize};

use ledger_kaia_core::{tx::FeePayer, BigUnsigned, Transaction};

/// Summary of a decoded transaction
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TxSummary {
    /// Transaction type name
    pub tx_type: String,
    /// Transaction type discriminant
    pub tx_type_id: u8,
    /// Fee payer class
    pub fee_payer: String,

    pub nonce: Amount,
    pub gas_price: Amount,
    pub gas_limit: Amount,
    pub value: Amount,

    /// Hex encoded recipient address (zeroed for deployments)
    pub to: String,

    /// Chain identifier, empty for pre-EIP-155 legacy transactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Amount>,

    /// Fee ratio for partial fee delegated transactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_ratio: Option<u8>,

    /// Whether the transaction carries a data payload
    pub data_present: bool,
}

/// Summary output format
#[derive(Copy, Clone, PartialEq, Debug, Default, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Format {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Format {
    /// Render a summary in this format
    pub fn render(&self, s: &TxSummary) -> Result<String, serde_json::Error> {
        match self {
            Format::Text => Ok(s.to_string()),
            Format::Json => serde_json::to_string_pretty(s),
        }
    }
}

/// Unsigned amount, as a u64 where this fits or a hex string otherwise
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    U64(u64),
    Hex(String),
}

impl From<&BigUnsigned> for Amount {
    fn from(v: &BigUnsigned) -> Self {
        match v.to_u64() {
            Some(n) => Amount::U64(n),
            None => Amount::Hex(format!("0x{v}")),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::U64(n) => write!(f, "{n}"),
            Amount::Hex(s) => write!(f, "{s}"),
        }
    }
}

impl From<&Transaction> for TxSummary {
    fn from(tx: &Transaction) -> Self {
        let fee_payer = tx.tx_type.fee_payer();

        Self {
            tx_type: tx.tx_type.to_string(),
            tx_type_id: tx.tx_type as u8,
            fee_payer: fee_payer.to_string(),
            nonce: Amount::from(&tx.nonce),
            gas_price: Amount::from(&tx.gas_price),
            gas_limit: Amount::from(&tx.gas_limit),
            value: Amount::from(&tx.value),
            to: format!("0x{}", hex::encode(tx.to)),
            chain_id: match tx.chain_id.is_empty() {
                true => None,
                false => Some(Amount::from(&tx.chain_id)),
            },
            fee_ratio: match fee_payer {
                FeePayer::PartialFeeDelegated => Some(tx.fee_ratio),
                _ => None,
            },
            data_present: tx.data_present,
        }
    }
}

impl std::fmt::Display for TxSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "type:      {} (0x{:02x})", self.tx_type, self.tx_type_id)?;
        writeln!(f, "fee payer: {}", self.fee_payer)?;
        writeln!(f, "nonce:     {}", self.nonce)?;
        writeln!(f, "gas price: {}", self.gas_price)?;
        writeln!(f, "gas limit: {}", self.gas_limit)?;
        writeln!(f, "to:        {}", self.to)?;
        writeln!(f, "value:     {}", self.value)?;

        if let Some(c) = &self.chain_id {
            writeln!(f, "chain id:  {c}")?;
        }
        if let Some(r) = &self.fee_ratio {
            writeln!(f, "fee ratio: {r}%")?;
        }

        write!(f, "data:      {}", self.data_present)
    }
}
