//! Scan-chain harness CLI.
//!
//! This binary provides a single entry point for driving the harness. It performs:
//! 1. **Describe:** Parse a mapping description and print its fields and positions.
//! 2. **Add:** Run the adder scan flow (scan in operands, one functional cycle, scan out the
//!    sum) against the behavioral DUT and check the result.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use scanchain_core::common::{format_bits, from_bits_msb, parse_bits};
use scanchain_core::config::Config;
use scanchain_core::sim::{ADDER_MAPPING, AdderLogic, ScanDut, run_addition};
use scanchain_core::{Chain, ChainError, ScanDriver};

#[derive(Parser, Debug)]
#[command(
    name = "scan",
    author,
    version,
    about = "Scan-chain test harness",
    long_about = "Inspect scan mapping descriptions and drive scan-inserted designs through their serial test port.\n\nExamples:\n  scan describe adder/adder.log\n  scan add 11 14\n  scan add 0b1011 0b1110\n  scan -vv add 1 1 --mapping adder/adder.log"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the fields and chain positions of a mapping description.
    Describe {
        /// Mapping description (`<position> <field> <bit>` per line).
        mapping: PathBuf,
    },

    /// Add two operands through the scan chain of the behavioral adder.
    Add {
        /// First operand, loaded into `a_reg` (decimal, or bits as `0b1011`).
        #[arg(value_parser = parse_operand)]
        a: u64,

        /// Second operand, loaded into `b_reg` (decimal, or bits as `0b1110`).
        #[arg(value_parser = parse_operand)]
        b: u64,

        /// Mapping description; defaults to the config's mapping, then the built-in adder chain.
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Describe { mapping } => {
            init_logging(cli.verbose, false);
            cmd_describe(&mapping)
        }
        Commands::Add {
            a,
            b,
            mapping,
            config,
        } => cmd_add(cli.verbose, a, b, mapping, config.as_deref()),
    };
    process::exit(code);
}

/// Parses a decimal operand or a most-significant-first bit string such as `0b1011_1110`.
fn parse_operand(text: &str) -> Result<u64, String> {
    let Some(digits) = text.strip_prefix("0b") else {
        return text.parse().map_err(|e| format!("`{text}`: {e}"));
    };
    match parse_bits(digits) {
        Some(bits) if !bits.is_empty() && bits.len() <= 64 => Ok(from_bits_msb(&bits)),
        Some(bits) if bits.len() > 64 => Err(format!("`{text}` is wider than 64 bits")),
        _ => Err(format!("`{text}` is not a bit string")),
    }
}

/// Installs the fmt subscriber. `RUST_LOG` wins over the verbosity flags and `trace_shifts`.
fn init_logging(verbose: u8, trace_shifts: bool) {
    let level = match (verbose, trace_shifts) {
        (_, true) | (3.., _) => "trace",
        (2, _) => "debug",
        (1, _) => "info",
        _ => "warn",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn cmd_describe(mapping: &Path) -> i32 {
    if let Err(e) = Chain::load(mapping).map(|chain| chain.print()) {
        eprintln!("Error: {e}");
        return 1;
    }
    0
}

/// Runs one addition and reports the sampled result.
///
/// Exits 0 when the scanned-out sum matches `a + b`, 2 when it does not, and 1 on any
/// mapping, configuration or operand error.
fn cmd_add(
    verbose: u8,
    a: u64,
    b: u64,
    mapping: Option<PathBuf>,
    config: Option<&Path>,
) -> i32 {
    let config = match config.map_or_else(|| Ok(Config::default()), Config::load) {
        Ok(config) => config,
        Err(e) => {
            init_logging(verbose, false);
            eprintln!("Error: {e}");
            return 1;
        }
    };
    init_logging(verbose, config.general.trace_shifts);

    match run_add(&config, a, b, mapping) {
        Ok(true) => 0,
        Ok(false) => 2,
        Err(e) => {
            error!(%e, "scan addition failed");
            eprintln!("Error: {e}");
            1
        }
    }
}

fn run_add(config: &Config, a: u64, b: u64, mapping: Option<PathBuf>) -> Result<bool, ChainError> {
    let mapping = mapping.or_else(|| config.chain.mapping.as_ref().map(PathBuf::from));
    let chain = mapping
        .as_ref()
        .map_or_else(|| ADDER_MAPPING.parse(), Chain::load)?;
    info!(
        mapping = mapping.as_ref().map_or_else(|| "<built-in>".to_string(), |p| p.display().to_string()),
        "using scan mapping"
    );

    let logic = AdderLogic::from_chain(&chain)?;
    let dut = ScanDut::with_logic(chain.total_length(), config.clock.half_period_ns, logic);
    let mut driver = ScanDriver::new(dut, &chain);

    let result = run_addition(&mut driver, &chain, a, b)?;
    let expected = a.wrapping_add(b);

    println!("[*] {a} + {b}");
    println!("    x_out bits  {}", format_bits(&result.bits));
    println!("    x_out       {}", result.sum);
    println!("    sim time    {} ns", driver.port().time_ns());
    driver.stats().print();

    if result.sum == expected {
        Ok(true)
    } else {
        println!("\n[!] MISMATCH: expected {expected}");
        Ok(false)
    }
}
