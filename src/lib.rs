//! cek: execution context and presentation layer for a command-line tool.
//!
//! Carries shared state across subcommands, renders results as human text or
//! JSON, and shows a progress spinner while slow operations run.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod spinner;
pub mod stream;
pub mod view;
