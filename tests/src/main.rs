// Copyright (c) 2025-2026 The Kaia Authors

//! Utility for exporting shared transaction vectors

use clap::Parser;
use log::{debug, info, LevelFilter};
use strum::{Display, EnumString, EnumVariantNames};

use ledger_kaia_tests::{MALFORMED, TRANSACTIONS};

/// Vector CLI arguments
#[derive(Clone, Debug, Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub cmd: Commands,

    /// Log level
    #[clap(long, default_value = "info", env)]
    pub log_level: LevelFilter,
}

/// Vector commands
#[derive(Clone, PartialEq, Debug, Parser, Display, EnumString, EnumVariantNames)]
pub enum Commands {
    /// List available vectors
    List,
    /// Print the encoded transaction for a named vector
    Show {
        /// Vector name
        name: String,
    },
    /// Export all vectors as JSON
    Export {
        /// Include malformed vectors
        #[clap(long)]
        malformed: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Load command line options
    let opts = Opts::parse();

    // Setup logging
    let _ = simplelog::SimpleLogger::init(opts.log_level, simplelog::Config::default());

    debug!("options: {:?}", opts);

    match opts.cmd {
        Commands::List => {
            info!("Transactions:");
            for t in TRANSACTIONS {
                info!("  {:48} (type 0x{:02x}, {} bytes)", t.name, t.tx_type, t.tx.len() / 2);
            }

            info!("Malformed:");
            for t in MALFORMED {
                info!("  {:48} ({})", t.name, t.error.unwrap_or("incomplete"));
            }
        }
        Commands::Show { name } => {
            let t = ledger_kaia_tests::find(&name)
                .ok_or_else(|| anyhow::anyhow!("Unknown vector: {}", name))?;

            println!("{}", t.tx);
        }
        Commands::Export { malformed } => {
            let v = match malformed {
                true => serde_json::json!({
                    "transactions": TRANSACTIONS,
                    "malformed": MALFORMED,
                }),
                false => serde_json::json!({ "transactions": TRANSACTIONS }),
            };

            println!("{}", serde_json::to_string_pretty(&v)?);
        }
    }

    Ok(())
}
