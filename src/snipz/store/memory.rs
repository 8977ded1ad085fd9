use super::{decode, encode, SnippetBackend};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Holds the serialized document rather than the snippets themselves, so
/// loading and saving exercise the same encoding as the file backend.
/// Uses `RefCell` for interior mutability since snipz is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    saves: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds `document`, as if read from disk.
    pub fn with_document(document: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.document.borrow_mut() = Some(document.into());
        backend
    }

    /// Backend that already holds `snippets`.
    pub fn with_snippets(snippets: &[Snippet]) -> Result<Self> {
        Ok(Self::with_document(encode(snippets)?))
    }

    /// The currently persisted document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl SnippetBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Snippet>>> {
        match self.document.borrow().as_deref() {
            Some(text) => decode(text).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, snippets: &[Snippet]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(SnipzError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        let text = encode(snippets)?;
        *self.document.borrow_mut() = Some(text);
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_backend_has_nothing_persisted() {
        let backend = MemBackend::new();
        assert!(backend.load().unwrap().is_none());
        assert_eq!(backend.save_count(), 0);
    }

    #[test]
    fn write_errors_leave_document_untouched() {
        let backend = MemBackend::with_document("[]");
        backend.set_simulate_write_error(true);

        assert!(backend.save(&[]).is_err());
        assert_eq!(backend.document().as_deref(), Some("[]"));
        assert_eq!(backend.save_count(), 0);
    }
}
