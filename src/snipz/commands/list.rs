use crate::commands::{cloned, CmdResult};
use crate::error::Result;
use crate::store::{SnippetBackend, SnippetStore};

/// List snippets for `language`, or every snippet for the `all` sentinel.
pub fn run<B: SnippetBackend>(store: &SnippetStore<B>, language: &str) -> Result<CmdResult> {
    let listed = cloned(store.list_by_language(language));
    Ok(CmdResult::default().with_listed_snippets(listed))
}
