use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetBackend, SnippetStore};

/// Fetch snippets by id. Unknown ids are reported, not treated as failures.
pub fn run<B: SnippetBackend>(store: &SnippetStore<B>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for id in ids {
        match store.get_by_id(*id) {
            Some(snippet) => result.listed_snippets.push(snippet.clone()),
            None => result.add_message(CmdMessage::error(format!("Snippet #{} not found", id))),
        }
    }
    Ok(result)
}
