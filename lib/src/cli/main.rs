// Copyright (c) 2025-2026 The Kaia Authors

//! Command line utility for decoding Kaia transactions

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info, LevelFilter};

use ledger_kaia::{decode_chunked, summary::Format, TxSummary, MAX_CHUNK_LEN};

mod helpers;
use helpers::*;

/// Kaia transaction command line utility
#[derive(Clone, PartialEq, Debug, Parser)]
struct Options {
    /// Subcommand to execute
    #[clap(subcommand)]
    cmd: Actions,

    /// Enable verbose logging
    #[clap(long, default_value = "info", env)]
    log_level: LevelFilter,
}

#[derive(Clone, PartialEq, Debug, Parser)]
#[non_exhaustive]
enum Actions {
    /// Decode an RLP encoded transaction
    Decode {
        /// Hex encoded transaction
        #[clap(long, conflicts_with = "file", required_unless_present = "file")]
        tx: Option<HexData>,

        /// File containing a hex encoded transaction
        #[clap(long)]
        file: Option<PathBuf>,

        /// Chunk size for streaming to the decoder
        #[clap(long, default_value_t = MAX_CHUNK_LEN, env)]
        chunk_size: usize,

        /// Summary output format
        #[clap(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Options::parse();

    // Setup logging
    let _ = simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default());

    debug!("Options: {:?}", args);

    match args.cmd {
        Actions::Decode {
            tx,
            file,
            chunk_size,
            format,
        } => {
            // Load transaction from argument or file
            let raw = match (tx, file) {
                (Some(tx), _) => tx,
                (None, Some(f)) => read_input(&f)?,
                (None, None) => return Err(anyhow::anyhow!("--tx or --file required")),
            };

            info!(
                "Decoding {} byte transaction ({} byte chunks)",
                raw.as_ref().len(),
                chunk_size
            );

            // Stream transaction to the decoder
            let t = decode_chunked(raw.as_ref(), chunk_size)?;
            let s = TxSummary::from(&t);

            // Display summary
            debug!("Rendering summary as {}", format);
            println!("{}", format.render(&s)?);
        }
    }

    Ok(())
}

/// Helper to read hex encoded transactions from a file
fn read_input(p: &Path) -> anyhow::Result<HexData> {
    debug!("Reading input from '{}'", p.display());

    let s = std::fs::read_to_string(p)?;
    let v = s.parse::<HexData>()?;

    Ok(v)
}
