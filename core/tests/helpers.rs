#![allow(unused)]

use log::{debug, trace};

use ledger_kaia_core::{
    decoder::{Decoder, Error, Progress},
    Transaction,
};
use ledger_kaia_tests::TransactionExpectation;

/// Setup test logging
pub fn setup() {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default());
}

/// Feed a transaction to a fresh decoder in fixed size chunks
pub fn decode_chunked(raw: &[u8], chunk_size: usize) -> Result<(Progress, Decoder), Error> {
    decode_split(raw, raw.len(), raw.chunks(chunk_size.max(1)))
}

/// Feed a transaction to a fresh decoder using the provided chunks
pub fn decode_split<'a>(
    raw: &[u8],
    declared_len: usize,
    chunks: impl Iterator<Item = &'a [u8]>,
) -> Result<(Progress, Decoder), Error> {
    let mut d = Decoder::new(declared_len)?;
    let mut p = Progress::NeedsMoreInput;

    for c in chunks {
        trace!("chunk: {:02x?}", c);
        p = d.update(c)?;
    }

    Ok((p, d))
}

/// Split a buffer at the provided (sorted) offsets
pub fn split_at<'a>(raw: &'a [u8], offsets: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = vec![];
    let mut start = 0;

    for o in offsets {
        chunks.push(&raw[start..*o]);
        start = *o;
    }
    chunks.push(&raw[start..]);

    chunks
}

/// Check a decoded transaction against expectations
pub fn check_tx(tx: &Transaction, v: &TransactionExpectation) {
    debug!("{}: {:?}", v.name, tx);

    assert_eq!(tx.tx_type as u8, v.tx_type, "{}: type", v.name);
    assert_eq!(hex::encode(tx.nonce.as_bytes()), v.nonce, "{}: nonce", v.name);
    assert_eq!(
        hex::encode(tx.gas_price.as_bytes()),
        v.gas_price,
        "{}: gas price",
        v.name
    );
    assert_eq!(
        hex::encode(tx.gas_limit.as_bytes()),
        v.gas_limit,
        "{}: gas limit",
        v.name
    );
    assert_eq!(tx.to, v.to(), "{}: to", v.name);
    assert_eq!(hex::encode(tx.value.as_bytes()), v.value, "{}: value", v.name);
    assert_eq!(
        hex::encode(tx.chain_id.as_bytes()),
        v.chain_id,
        "{}: chain id",
        v.name
    );
    assert_eq!(tx.fee_ratio, v.fee_ratio, "{}: fee ratio", v.name);
    assert_eq!(tx.data_present, v.data_present, "{}: data", v.name);
}
