//! # Mangal Shell Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mangal Shell                                     │
//! │                                                                         │
//! │  stdin  ──► one action per line ("add 1", "checkout", "submit")        │
//! │  stdout ◄── one JSON envelope per action                               │
//! │  stderr ◄── tracing logs (RUST_LOG)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs.

use clap::Parser;
use mangal_shell_lib::ShellOptions;

fn main() {
    let options = ShellOptions::parse();

    if let Err(err) = mangal_shell_lib::run(options) {
        tracing::error!(%err, "Shell terminated");
        std::process::exit(1);
    }
}
