//! # Storage Layer
//!
//! The store keeps the authoritative, ordered collection of snippets in memory
//! and writes the whole collection back through a [`SnippetBackend`] after
//! every mutation.
//!
//! ## Backends
//!
//! - [`fs::JsonFileBackend`]: production storage, a single JSON file
//!   (`snippets.json` by default) rewritten atomically on each save.
//! - [`memory::MemBackend`]: keeps the serialized document in memory. Used by
//!   tests; it goes through the same serde path as the file backend so malformed
//!   documents and write failures can be simulated.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "Распаковка tar.gz",
//!     "language": "bash",
//!     "code": "tar -xzvf archive.tar.gz",
//!     "tags": ["linux", "archive", "compression"]
//!   }
//! ]
//! ```
//!
//! Loading is all-or-nothing: one malformed record invalidates the document.

use crate::error::Result;
use crate::model::Snippet;

pub mod fs;
pub mod memory;
pub mod snippet_store;

pub use snippet_store::{LoadOutcome, SnippetStore};

/// Raw persistence for the snippet collection.
///
/// Backends only move whole documents; ordering, ids and queries are the
/// store's business.
pub trait SnippetBackend {
    /// Read the persisted collection.
    /// Returns Ok(None) if nothing has been persisted yet.
    /// Returns Err(Serialization) if the document is structurally invalid.
    fn load(&self) -> Result<Option<Vec<Snippet>>>;

    /// Replace the persisted collection with `snippets`, in order.
    /// MUST NOT leave a partially written document behind.
    fn save(&self, snippets: &[Snippet]) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}

/// Decode a persisted document.
pub(crate) fn decode(text: &str) -> Result<Vec<Snippet>> {
    Ok(serde_json::from_str(text)?)
}

/// Encode the collection as pretty JSON. Non-ASCII text is written as-is.
pub(crate) fn encode(snippets: &[Snippet]) -> Result<String> {
    Ok(serde_json::to_string_pretty(snippets)?)
}
