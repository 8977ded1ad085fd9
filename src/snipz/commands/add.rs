use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::NewSnippet;
use crate::store::{SnippetBackend, SnippetStore};

/// Split a comma separated tag list, trimming entries and dropping empty ones.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize user input the way the add form does: titles are trimmed,
/// languages trimmed and lowercased, code kept verbatim.
pub fn normalize(fields: NewSnippet) -> NewSnippet {
    NewSnippet {
        title: fields.title.trim().to_string(),
        language: fields.language.trim().to_lowercase(),
        code: fields.code,
        tags: fields.tags,
    }
}

pub fn run<B: SnippetBackend>(
    store: &mut SnippetStore<B>,
    fields: NewSnippet,
) -> Result<CmdResult> {
    let fields = normalize(fields);
    let missing = fields.missing_fields();
    if !missing.is_empty() {
        return Err(SnipzError::Validation { missing });
    }

    let snippet = store.add(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added (#{}): {}",
        snippet.id, snippet.title
    )));
    Ok(result.with_affected_snippets(vec![snippet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn normalizes_title_and_language() {
        let mut store = fixtures::store();
        let result = run(
            &mut store,
            NewSnippet::new("  Hello  ", " RUST ", "fn main() {}\n", vec!["cli".into()]),
        )
        .unwrap();

        let added = &result.affected_snippets[0];
        assert_eq!(added.id, 4);
        assert_eq!(added.title, "Hello");
        assert_eq!(added.language, "rust");
        assert_eq!(added.code, "fn main() {}\n");
        assert_eq!(store.list_all().len(), 4);
    }

    #[test]
    fn reports_every_missing_field() {
        let mut store = fixtures::store();
        let err = run(&mut store, NewSnippet::new("", "  ", "", vec![])).unwrap_err();

        match err {
            SnipzError::Validation { missing } => {
                assert_eq!(missing, vec!["title", "language", "code"])
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn parse_tags_trims_and_drops_empties() {
        assert_eq!(
            parse_tags(" docker, deploy,, quick ,"),
            vec!["docker", "deploy", "quick"]
        );
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn parse_tags_keeps_duplicates_and_order() {
        assert_eq!(parse_tags("b,a,b"), vec!["b", "a", "b"]);
    }
}
