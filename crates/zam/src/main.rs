//! # Zam CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/zam/src/cli/)                            │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config, logging and dispatch (commands.rs)               │
//! │  - Terminal and JSON rendering (render.rs)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  zamfilter::api::FilterApi                                  │
//! │  - One filter event in, one Outcome out                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation is one page load: the snapshot is read, filters are
//! restored from `--url`, at most one event is applied, and the resulting
//! URL is printed so the next invocation can pick up from there.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
