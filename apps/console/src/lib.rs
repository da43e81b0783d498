//! # ShopZen Console Library
//!
//! The orchestration layer between the shop console screens and
//! `shopzen-core`: owned session state, command functions, and the `shopzen`
//! receipt binary.
//!
//! ## Module Organization
//! ```text
//! shopzen_console/
//! ├── lib.rs           ◄─── You are here (logging setup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── pos.rs       ◄─── POS cart session
//! │   ├── purchase.rs  ◄─── Purchase invoice draft + ledger
//! │   └── config.rs    ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── cart.rs      ◄─── Cart manipulation commands
//! │   ├── purchase.rs  ◄─── Purchase commands
//! │   └── config.rs    ◄─── Configuration retrieval
//! ├── ticket.rs        ◄─── JSON ticket files
//! └── error.rs         ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod ticket;

use std::error::Error;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, PosSession};
use ticket::{Ticket, TicketError};

const USAGE: &str = "usage: shopzen <ticket.json> [--json] [--width <columns>]";

/// Parsed command line of the `shopzen` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub ticket: PathBuf,
    /// Print the settled cart as JSON instead of a receipt
    pub json: bool,
    /// Overrides the configured receipt width
    pub width: Option<usize>,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut ticket = None;
        let mut json = false;
        let mut width = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => json = true,
                "--width" => {
                    let value = args.next().ok_or_else(|| USAGE.to_string())?;
                    let columns = value
                        .parse::<usize>()
                        .map_err(|_| format!("invalid width '{}'\n{}", value, USAGE))?;
                    width = Some(columns);
                }
                "-h" | "--help" => return Err(USAGE.to_string()),
                _ if arg.starts_with('-') => {
                    return Err(format!("unknown option '{}'\n{}", arg, USAGE))
                }
                _ if ticket.is_none() => ticket = Some(PathBuf::from(&arg)),
                _ => return Err(USAGE.to_string()),
            }
        }

        Ok(CliArgs {
            ticket: ticket.ok_or_else(|| USAGE.to_string())?,
            json,
            width,
        })
    }
}

/// Settles a ticket and returns what the binary prints.
pub fn settle_ticket(
    args: &CliArgs,
    config: &ConfigState,
    printed_at: NaiveDateTime,
) -> Result<String, TicketError> {
    let ticket = Ticket::load(&args.ticket)?;
    let mut session = PosSession::new(config.pos_tax_rate);
    let response = ticket.apply(&mut session)?;

    info!(
        ticket = %args.ticket.display(),
        lines = response.items.len(),
        grand_total = %config.format_currency(response.totals.grand_total),
        "Ticket settled"
    );

    if args.json {
        return Ok(serde_json::to_string_pretty(&response)?);
    }

    let config = ConfigState {
        receipt_width: args.width.unwrap_or(config.receipt_width),
        ..config.clone()
    };
    Ok(commands::cart::print_receipt(&session, &config, printed_at)?)
}

/// Runs the `shopzen` binary.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging to stderr)
/// 2. Load configuration from `SHOPZEN_*` environment variables
/// 3. Parse the command line
/// 4. Replay the ticket into a fresh POS session and print the result
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, tax_rate = %config.pos_tax_rate, "Starting ShopZen console");

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let output = settle_ticket(&args, &config, Local::now().naive_local())?;
    println!("{}", output);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopzen_console=trace` - Trace the console only
/// - Default: INFO, DEBUG for shopzen crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shopzen=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
