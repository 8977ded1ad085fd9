//! # CLI Layer
//!
//! One possible UI client for snipz. This is the only place that parses
//! arguments, reads stdin, and writes to the terminal.
//!
//! - [`setup`]: clap definitions
//! - [`commands`]: per-command handlers calling `SnipzApi`
//! - [`render`]: terminal output for `CmdResult` values

pub mod commands;
pub mod render;
pub mod setup;
