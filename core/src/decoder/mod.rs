// Copyright (c) 2025-2026 The Kaia Authors

//! Streaming transaction decoder
//!
//! Transactions are supplied via [Decoder::update] in one or more chunks
//! (typically one per APDU), with the total length declared up front
//! via [Decoder::new]. The decoder suspends whenever a header or field
//! spans a chunk boundary and resumes on the next call, so any split of
//! the same input produces the same [Transaction].
//!
//! Two envelope shapes are supported:
//!
//! - legacy `[nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0]`
//! - typed `[rlp([type, nonce, ...]), chainId, 0, 0]`, where the first
//!   item is a byte string wrapping the typed content list
//!
//! Fields are dispatched through per-family [tables][table] of
//! [FieldHandler]s, see [table] for layouts.

use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::{
    rlp::{Cursor, Header, HeaderReader},
    tx::{FeePayer, Transaction, TxType},
};

mod error;
pub use error::Error;

pub mod field;
use field::{Field, FieldEntry, FieldHandler, FieldState};

pub mod table;

/// Maximum supported transaction length
#[cfg(feature = "large_tx")]
pub const MAX_TX_LEN: usize = 8190;

/// Maximum supported transaction length
#[cfg(not(feature = "large_tx"))]
pub const MAX_TX_LEN: usize = 510;

/// Lowest RLP list prefix, used to tell typed content from a legacy nonce
const LIST_PREFIX: u8 = 0xc0;

/// Decoder state enumeration
#[derive(
    Copy, Clone, PartialEq, Eq, Debug, Default, EnumString, Display, EnumVariantNames, EnumIter,
)]
pub enum State {
    /// Awaiting outer list header
    #[default]
    Init,
    /// Awaiting first envelope item
    Envelope,
    /// Checking whether a multi-byte envelope item wraps typed content
    Wrapper,
    /// Awaiting typed content list header
    Content,
    /// Awaiting typed transaction tag
    TypeTag,
    /// Dispatching fields
    Fields,
    /// Transaction decoded
    Complete,
    /// Decoding failed
    Error,
}

/// Decoder progress, returned from [Decoder::update]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum Progress {
    /// Input exhausted, supply the next chunk
    NeedsMoreInput,
    /// Transaction decoded
    Complete,
}

/// Caller-facing decode status
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumString, EnumVariantNames)]
pub enum Status {
    /// More input is required
    NeedsMoreInput,
    /// Transaction decoded
    Ok,
    /// Malformed or unsupported encoding
    StructuralError,
    /// Declared or supplied length out of bounds
    LengthError,
}

/// Internal step result
#[derive(Copy, Clone, PartialEq, Debug)]
enum Step {
    Continue,
    NeedsMoreInput,
    Done,
}

/// Streaming transaction decoder
#[derive(Clone, PartialEq, Debug)]
pub struct Decoder {
    state: State,
    reader: HeaderReader,
    /// Envelope item, then typed content list header
    envelope: Header,
    table: &'static [FieldEntry],
    index: usize,
    field: Option<FieldState>,
    /// Declared input not yet supplied
    pending: usize,
    /// Typed content not yet consumed, `None` once checked or for legacy transactions
    content: Option<u32>,
    tx: Transaction,
}

// Decoder state is held on-device, keep it small
static_assertions::const_assert!(core::mem::size_of::<Decoder>() <= 512);

impl Decoder {
    /// Create a new decoder for a transaction of `len` bytes
    pub fn new(len: usize) -> Result<Self, Error> {
        if len > MAX_TX_LEN {
            #[cfg(feature = "log")]
            log::error!("Transaction length {} exceeds maximum {}", len, MAX_TX_LEN);

            return Err(Error::InvalidLength);
        }

        Ok(Self {
            state: State::Init,
            reader: HeaderReader::default(),
            envelope: Header::default(),
            table: &[],
            index: 0,
            field: None,
            pending: len,
            content: None,
            tx: Transaction::default(),
        })
    }

    /// Fetch decoder state
    pub fn state(&self) -> State {
        self.state
    }

    /// Fetch the field currently being decoded, if any
    pub fn field(&self) -> Option<Field> {
        match self.state {
            State::Fields => self.table.get(self.index).map(|e| e.field),
            _ => None,
        }
    }

    /// Declared input not yet supplied
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Fetch the decoded transaction, available only once complete
    pub fn transaction(&self) -> Option<&Transaction> {
        match self.state {
            State::Complete => Some(&self.tx),
            _ => None,
        }
    }

    /// Consume the decoder, returning the decoded transaction
    pub fn finish(self) -> Result<Transaction, Error> {
        match self.state {
            State::Complete => Ok(self.tx),
            State::Error => Err(Error::InvalidState),
            _ => Err(Error::Incomplete),
        }
    }

    /// Update the decoder with the next chunk of input
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn update(&mut self, chunk: &[u8]) -> Result<Progress, Error> {
        match self.state {
            State::Complete => return Ok(Progress::Complete),
            State::Error => return Err(Error::InvalidState),
            _ => (),
        }

        if chunk.len() > self.pending {
            #[cfg(feature = "log")]
            log::error!(
                "Chunk of {} bytes exceeds remaining length {}",
                chunk.len(),
                self.pending
            );

            return self.fail(Error::InvalidLength);
        }
        self.pending -= chunk.len();

        let mut c = Cursor::new(chunk);

        loop {
            match self.step(&mut c) {
                Ok(Step::Continue) => (),
                Ok(Step::NeedsMoreInput) => return Ok(Progress::NeedsMoreInput),
                Ok(Step::Done) => {
                    #[cfg(feature = "log")]
                    log::debug!(
                        "Decoded {} transaction ({} trailing bytes)",
                        self.tx.tx_type,
                        c.remaining() + self.pending
                    );

                    self.state = State::Complete;
                    return Ok(Progress::Complete);
                }
                Err(e) => return self.fail(e),
            }
        }
    }

    fn fail(&mut self, e: Error) -> Result<Progress, Error> {
        #[cfg(feature = "log")]
        log::error!(
            "Decode failed (state: {}, field: {:?}): {:?}",
            self.state,
            self.field(),
            e
        );

        self.state = State::Error;
        Err(e)
    }

    /// Execute a single state transition
    fn step(&mut self, c: &mut Cursor) -> Result<Step, Error> {
        match self.state {
            State::Init => {
                let h = match self.reader.read(c)? {
                    Some(h) => h,
                    None => return Ok(Step::NeedsMoreInput),
                };

                if !h.list {
                    return Err(Error::UnexpectedString);
                }

                self.state = State::Envelope;
            }
            State::Envelope => {
                let h = match self.reader.read(c)? {
                    Some(h) => h,
                    None => return Ok(Step::NeedsMoreInput),
                };

                if h.list {
                    return Err(Error::UnexpectedList);
                }

                // Typed content is never a single byte or empty
                if h.is_single() || h.len == 0 {
                    self.begin_legacy(h)?;
                } else {
                    self.envelope = h;
                    self.state = State::Wrapper;
                }
            }
            State::Wrapper => match c.peek() {
                None => return Ok(Step::NeedsMoreInput),
                Some(b) if b >= LIST_PREFIX => self.state = State::Content,
                Some(_) => self.begin_legacy(self.envelope)?,
            },
            State::Content => {
                // Entered only after peeking a list prefix
                let h = match self.reader.read(c)? {
                    Some(h) => h,
                    None => return Ok(Step::NeedsMoreInput),
                };

                // Content list must fill the wrapper exactly
                if h.len.checked_add(h.offset as u32) != Some(self.envelope.len) {
                    return Err(Error::ContentLength);
                }

                self.envelope = h;
                self.state = State::TypeTag;
            }
            State::TypeTag => {
                // Peek only, the tag is consumed by the type field
                let b = match c.peek() {
                    Some(b) => b,
                    None => return Ok(Step::NeedsMoreInput),
                };

                let t = match TxType::from_typed(b) {
                    Some(t) => t,
                    None => {
                        #[cfg(feature = "log")]
                        log::error!("Unsupported transaction type: 0x{:02x}", b);

                        return Err(Error::UnsupportedType);
                    }
                };

                self.begin(t);
                self.content = Some(self.envelope.len);

                // Replay the content list header as the first field
                self.begin_field(self.envelope)?;
            }
            State::Fields => return self.fields(c),
            State::Complete => return Ok(Step::Done),
            State::Error => return Err(Error::InvalidState),
        }

        Ok(Step::Continue)
    }

    /// Select the field table for a resolved transaction type
    fn begin(&mut self, t: TxType) {
        #[cfg(feature = "log")]
        log::debug!("Transaction type: {} (0x{:02x})", t, t as u8);

        self.tx.tx_type = t;
        self.table = table::table(t.family());
        self.index = 0;
        self.state = State::Fields;
    }

    /// Start a legacy transaction, replaying the envelope item as the nonce
    fn begin_legacy(&mut self, h: Header) -> Result<(), Error> {
        self.begin(TxType::Legacy);
        self.begin_field(h)
    }

    /// Start the current field with a decoded header
    fn begin_field(&mut self, h: Header) -> Result<(), Error> {
        let e = *self.table.get(self.index).ok_or(Error::InvalidState)?;

        #[cfg(feature = "log")]
        log::debug!("Field {} ({}): {:?}", e.field, e.handler, h);

        if let Err(err) = e.handler.check(&h) {
            #[cfg(feature = "log")]
            log::error!("Invalid header for field {}: {:?}", e.field, h);

            return Err(err);
        }

        e.handler.begin(&h, &mut self.tx);
        self.field = Some(FieldState { header: h, pos: 0 });

        Ok(())
    }

    /// Skip fields absent for the current fee payer class
    fn skip_fields(&mut self) {
        let partial = self.tx.tx_type.fee_payer() == FeePayer::PartialFeeDelegated;

        while let Some(e) = self.table.get(self.index) {
            if e.handler != FieldHandler::Ratio || partial {
                break;
            }
            self.index += 1;
        }
    }

    /// Charge consumed bytes against the typed content length
    fn charge(&mut self, n: usize) -> Result<(), Error> {
        if let Some(r) = self.content.as_mut() {
            *r = r.checked_sub(n as u32).ok_or(Error::ContentLength)?;
        }
        Ok(())
    }

    /// Dispatch fields until the input or the field table is exhausted
    #[cfg_attr(feature = "noinline", inline(never))]
    fn fields(&mut self, c: &mut Cursor) -> Result<Step, Error> {
        loop {
            if self.field.is_none() {
                self.skip_fields();
            }

            let e = match self.table.get(self.index) {
                Some(e) => *e,
                None => return Ok(Step::Done),
            };

            if self.field.is_none() {
                if e.field == Field::ChainId {
                    // Typed content must end exactly before the chain id
                    if let Some(n) = self.content.take() {
                        if n != 0 {
                            return Err(Error::ContentLength);
                        }
                    }

                    // Pre-EIP-155 legacy transactions may end before the chain id
                    if self.tx.tx_type == TxType::Legacy
                        && c.is_empty()
                        && self.pending == 0
                        && !self.reader.is_pending()
                    {
                        return Ok(Step::Done);
                    }
                }

                let start = c.position();
                let h = self.reader.read(c);
                self.charge(c.position() - start)?;

                match h? {
                    Some(h) => self.begin_field(h)?,
                    None => return Ok(Step::NeedsMoreInput),
                }
            }

            let mut f = self.field.take().ok_or(Error::InvalidState)?;

            if e.handler.consumes_payload() {
                let d = c.take(f.remaining());
                self.charge(d.len())?;

                e.handler
                    .apply(e.field, &f.header, f.pos as usize, d, &mut self.tx)?;
                f.pos += d.len() as u32;

                if !f.is_done() {
                    self.field = Some(f);
                    return Ok(Step::NeedsMoreInput);
                }
            }

            self.index += 1;
        }
    }
}

/// Decode a complete transaction from a single buffer
pub fn deserialize(buff: &[u8]) -> Result<Transaction, Error> {
    let mut d = Decoder::new(buff.len())?;
    d.update(buff)?;
    d.finish()
}
