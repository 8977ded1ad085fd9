//! # Snipz Architecture
//!
//! Snipz is a small **code-snippet library** with a command-line client on top.
//! Snippets (title, language, code, tags) live in one local JSON file; the
//! library owns loading, querying and every mutation of that file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, sets exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input normalization, user-facing messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore: ordered collection, ids, queries           │
//! │  - SnippetBackend: JsonFileBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through the `log` facade; anything the user
//! should see comes back as a [`commands::CmdMessage`].
//!
//! ## Consistency
//!
//! Each mutating call changes the in-memory collection and rewrites the whole
//! file before returning. Mutations take `&mut self`; a store shared between
//! threads has to sit behind a `Mutex` so "mutate then persist" stays
//! exclusive.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-command logic and result types
//! - [`store`]: Snippet store and storage backends
//! - [`model`]: `Snippet`, `NewSnippet`, `SnippetPatch`, matching rules
//! - [`config`]: Configuration file
//! - [`init`]: Wiring of config, data file and store for clients
//! - [`seed`]: First-run example snippets
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod seed;
pub mod store;
