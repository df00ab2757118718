//! minidash - a terminal dashboard for researcher survey tracking
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod export;
pub mod filter;
pub mod gateway;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod state;
pub mod traits;
pub mod ui;
pub mod view_state;
