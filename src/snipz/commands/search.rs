use crate::commands::{cloned, CmdResult};
use crate::error::Result;
use crate::store::{SnippetBackend, SnippetStore};

pub fn run<B: SnippetBackend>(
    store: &SnippetStore<B>,
    query: &str,
    language: Option<&str>,
) -> Result<CmdResult> {
    let listed = cloned(store.search(query, language));
    Ok(CmdResult::default().with_listed_snippets(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn matches_on_tag_alone() {
        let store = fixtures::store();
        let result = run(&store, "ARCHIVE", None).unwrap();
        assert_eq!(result.listed_snippets.len(), 1);
        assert_eq!(result.listed_snippets[0].id, 1);
    }

    #[test]
    fn language_restricts_matches() {
        let store = fixtures::store();

        let both = run(&store, "python", None).unwrap();
        assert_eq!(both.listed_snippets.len(), 2);

        let bash_only = run(&store, "python", Some("bash")).unwrap();
        assert_eq!(bash_only.listed_snippets.len(), 1);
        assert_eq!(bash_only.listed_snippets[0].title, "Python HTTP сервер");
    }

    #[test]
    fn empty_query_lists_language() {
        let store = fixtures::store();
        let result = run(&store, "", Some("bash")).unwrap();
        assert_eq!(result.listed_snippets.len(), 2);
    }
}
