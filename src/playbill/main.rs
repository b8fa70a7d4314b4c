//! # Playbill CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/playbill/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and dispatch (commands.rs)                │
//! │  - Transcript rendering (render.rs)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (src/playbill/lib.rs)                              │
//! │  - Scripts, movies, observers                               │
//! │  - Returns a Transcript, never prints                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Diagnostics go through `log` to stderr (`--verbose` or `RUST_LOG`); stdout
//! carries only the transcript.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
