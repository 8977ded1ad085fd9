use crate::commands::{CmdResult, LanguageCount};
use crate::error::Result;
use crate::model::ALL_LANGUAGES;
use crate::store::{SnippetBackend, SnippetStore};

/// Languages with their snippet counts, led by an `all` row for the whole
/// collection.
pub fn run<B: SnippetBackend>(store: &SnippetStore<B>) -> Result<CmdResult> {
    let mut languages = vec![LanguageCount {
        language: ALL_LANGUAGES.to_string(),
        count: store.list_all().len(),
    }];
    languages.extend(
        store
            .language_counts()
            .into_iter()
            .map(|(language, count)| LanguageCount { language, count }),
    );
    Ok(CmdResult::default().with_languages(languages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn leads_with_all_then_sorted_languages() {
        let store = fixtures::store();
        let result = run(&store).unwrap();
        let rows: Vec<(&str, usize)> = result
            .languages
            .iter()
            .map(|l| (l.language.as_str(), l.count))
            .collect();
        assert_eq!(rows, vec![("all", 3), ("bash", 2), ("python", 1)]);
    }
}
