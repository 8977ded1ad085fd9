use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SnippetPatch;
use crate::store::{SnippetBackend, SnippetStore};

fn normalize(patch: SnippetPatch) -> SnippetPatch {
    SnippetPatch {
        title: patch.title.map(|t| t.trim().to_string()),
        language: patch.language.map(|l| l.trim().to_lowercase()),
        ..patch
    }
}

pub fn run<B: SnippetBackend>(
    store: &mut SnippetStore<B>,
    id: i64,
    patch: SnippetPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to update for snippet #{}",
            id
        )));
        return Ok(result);
    }

    match store.update(id, &normalize(patch))? {
        Some(snippet) => {
            result.add_message(CmdMessage::success(format!(
                "Snippet updated (#{}): {}",
                snippet.id, snippet.title
            )));
            result.affected_snippets.push(snippet);
        }
        None => result.add_message(CmdMessage::error(format!("Snippet #{} not found", id))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::error::SnipzError;

    #[test]
    fn updates_only_given_fields() {
        let mut store = fixtures::store();
        let patch = SnippetPatch::default()
            .language(" Shell ")
            .tags(vec!["net".into()]);

        let result = run(&mut store, 2, patch).unwrap();

        let updated = &result.affected_snippets[0];
        assert_eq!(updated.title, "Python HTTP сервер");
        assert_eq!(updated.language, "shell");
        assert_eq!(updated.tags, vec!["net"]);
        assert_eq!(store.get_by_id(2).unwrap(), updated);
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut store = fixtures::store();
        let result = run(&mut store, 99, SnippetPatch::default().title("x")).unwrap();
        assert!(result.has_errors());
        assert!(result.affected_snippets.is_empty());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut store = fixtures::store();
        let saves = store.backend().save_count();
        let result = run(&mut store, 1, SnippetPatch::default()).unwrap();
        assert!(!result.has_errors());
        assert_eq!(store.backend().save_count(), saves);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut store = fixtures::store();
        let err = run(&mut store, 1, SnippetPatch::default().title("   ")).unwrap_err();
        assert!(matches!(err, SnipzError::Validation { .. }));
        assert_eq!(store.get_by_id(1).unwrap().title, "Extract tar.gz");
    }
}
