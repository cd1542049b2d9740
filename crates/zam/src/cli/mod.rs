//! # CLI Behavior
//!
//! This is **one possible UI client** for zamfilter. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `zam --page list.json` with no command defaults to `zam list`.
//!
//! ## Chaining
//!
//! Filter state lives in the URL, exactly as on the web page. Each command
//! prints the updated URL; feed it back with `--url` to keep narrowing:
//!
//! ```bash
//! zam --page list.json set article 6
//! zam --page list.json --url 'http://localhost/amendements?article=6' cycle objet
//! ```
//!
//! ## Module Structure
//!
//! - `commands`: Tracing/config setup and per-command handlers
//! - `render`: Text and JSON output
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
