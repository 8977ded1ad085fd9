//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients. It dispatches to `commands/*.rs`, owns the
//! [`SnippetStore`] for the lifetime of the client, and returns structured
//! [`CmdResult`] values. It never prints.
//!
//! `SnipzApi<B: SnippetBackend>` is generic over the storage backend:
//! - Production: `SnipzApi<JsonFileBackend>`
//! - Testing: `SnipzApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::model::{NewSnippet, SnippetPatch};
use crate::store::{LoadOutcome, SnippetBackend, SnippetStore};

pub struct SnipzApi<B: SnippetBackend> {
    store: SnippetStore<B>,
}

impl<B: SnippetBackend> SnipzApi<B> {
    pub fn new(store: SnippetStore<B>) -> Self {
        Self { store }
    }

    /// Messages describing how the store was opened, for the UI to show once.
    pub fn startup_messages(&self) -> Vec<CmdMessage> {
        match self.store.outcome() {
            LoadOutcome::Loaded(_) => Vec::new(),
            LoadOutcome::Seeded(count) => vec![CmdMessage::info(format!(
                "Created {} with {} example snippets",
                self.store.location(),
                count
            ))],
            LoadOutcome::Recovered { reason } => vec![CmdMessage::warning(format!(
                "Could not read {} ({}); starting with no snippets",
                self.store.location(),
                reason
            ))],
        }
    }

    pub fn list_snippets(&self, language: &str) -> Result<CmdResult> {
        commands::list::run(&self.store, language)
    }

    pub fn list_languages(&self) -> Result<CmdResult> {
        commands::languages::run(&self.store)
    }

    pub fn search_snippets(&self, query: &str, language: Option<&str>) -> Result<CmdResult> {
        commands::search::run(&self.store, query, language)
    }

    pub fn view_snippets(&self, ids: &[i64]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn add_snippet(&mut self, fields: NewSnippet) -> Result<CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn update_snippet(&mut self, id: i64, patch: SnippetPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_snippets(&mut self, ids: &[i64]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn store(&self) -> &SnippetStore<B> {
        &self.store
    }
}

/// Read or change the configuration. Needs no store, so clients can call it
/// without opening the data file.
pub fn config(paths: &SnipzPaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}

pub use crate::commands::config::ConfigAction;
pub use commands::add::parse_tags;
pub use commands::{CmdMessage, CmdResult, LanguageCount, MessageLevel, SnipzPaths};
