use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SnippetBackend, SnippetStore};

pub fn run<B: SnippetBackend>(store: &mut SnippetStore<B>, ids: &[i64]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let snippet = store.get_by_id(id).cloned();
        if store.delete(id)? {
            if let Some(snippet) = snippet {
                result.add_message(CmdMessage::success(format!(
                    "Snippet deleted (#{}): {}",
                    id, snippet.title
                )));
                result.affected_snippets.push(snippet);
            }
        } else {
            result.add_message(CmdMessage::error(format!("Snippet #{} not found", id)));
        }
    }

    Ok(result)
}
