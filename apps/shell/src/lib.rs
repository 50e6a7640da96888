//! # Mangal Shell Library
//!
//! Line-oriented stand-in for the storefront page. Reads one user action per
//! line and prints one JSON envelope per action.
//!
//! ## Module Organization
//! ```text
//! mangal_shell_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line parser, dispatch, read loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Catalog + the single Session
//! │   └── config.rs   ◄─── Store facts (name, phone, delivery)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Menu and store info
//! │   ├── cart.rs     ◄─── Add/remove/get cart
//! │   ├── view.rs     ◄─── Cart panel and order form navigation
//! │   └── order.rs    ◄─── Delivery form and submission
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Shell State                                     │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │        SessionState          │   │        ConfigState           │   │
//! │  │                              │   │                              │   │
//! │  │  • Catalog (read-only menu)  │   │  • Store name, tagline       │   │
//! │  │  • Session (cart, form,      │   │  • Contact phone, hours      │   │
//! │  │    view, pending changes)    │   │  • Free delivery threshold   │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Each command takes only the state it needs.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shell::ShellState;
use state::{ConfigState, SessionState};

/// Command-line flags. They take priority over `MANGAL_*` variables.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mangal-shell", version, about = "Mangal storefront shell")]
pub struct ShellOptions {
    /// Store name shown in the header
    #[arg(long)]
    pub store_name: Option<String>,

    /// Order total (whole rubles) from which delivery is free
    #[arg(long)]
    pub free_delivery_from: Option<u32>,

    /// Pretty-print each JSON response over several lines. Output is then
    /// no longer one envelope per line.
    #[arg(long)]
    pub pretty: bool,
}

/// Runs the shell over stdin/stdout until EOF or `quit`.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, so stdout stays JSON)
/// 2. Load config: defaults, then `MANGAL_*` variables, then flags
/// 3. Start a fresh session over the standard menu
/// 4. Read lines
pub fn run(options: ShellOptions) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::from_env().with_overrides(options.store_name, options.free_delivery_from);
    info!(
        store = %config.store_name,
        free_delivery_from = %config.free_delivery_from,
        "Starting Mangal storefront shell"
    );

    let mut state = ShellState::new(SessionState::default(), config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_loop(&mut state, stdin.lock(), stdout.lock(), options.pretty)?;

    info!("Shell finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=mangal_core=trace` - Show trace for the core only
/// - Default: INFO, DEBUG for `mangal*` targets
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mangal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
