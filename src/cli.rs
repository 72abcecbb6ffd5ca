//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use voucherbox::output::OutputMode;
use voucherbox::storage::DEFAULT_VOUCHER_PATH;

/// voucherbox - create and redeem discount vouchers
#[derive(Parser, Debug)]
#[command(
    name = "voucherbox",
    version,
    about = "Create and redeem discount vouchers",
    long_about = "Create percentage-discount vouchers and apply them to purchases.\n\n\
                  A voucher is redeemed at most once, and only for purchases\n\
                  that reach the minimum amount."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the voucher file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new voucher
    Create {
        /// Redemption code (must be unique)
        code: String,

        /// Discount in percent
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
        discount: u8,
    },

    /// Apply a voucher to a purchase amount
    Apply {
        /// Redemption code
        code: String,

        /// Purchase amount in whole currency units
        amount: u64,
    },

    /// List all stored vouchers
    List,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let store_path = cli.store.unwrap_or_else(|| PathBuf::from(DEFAULT_VOUCHER_PATH));

    match cli.command {
        Some(Command::Create { code, discount }) => {
            commands::create(&code, discount, &store_path, output_mode)
        },
        Some(Command::Apply { code, amount }) => {
            commands::apply(&code, amount, &store_path, output_mode)
        },
        Some(Command::List) => commands::list(&store_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("voucherbox v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("voucherbox v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'voucherbox --help' for usage");
            }
            Ok(())
        },
    }
}
