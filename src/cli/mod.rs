//! Command-line interface.
//!
//! Parsed before the terminal is touched so that `--version`, `--help` and
//! `--export` never enter the alternate screen.
//!
//! ```ignore
//! use minidash::cli::{parse_args, CliCommand};
//!
//! let args = parse_args(std::env::args());
//! let config = args.apply(DashboardConfig::from_env());
//! match args.command {
//!     CliCommand::RunTui => { /* start the TUI */ }
//!     _ => { /* one-shot command */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, USAGE};
pub use version::{version_string, VERSION};
