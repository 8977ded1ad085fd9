use super::SnippetBackend;
use crate::error::{Result, SnipzError};
use crate::model::{is_all_sentinel, language_matches, NewSnippet, Snippet, SnippetPatch};
use crate::seed::seed_snippets;
use std::collections::BTreeSet;

/// How the collection was obtained when the store was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing document was read.
    Loaded(usize),
    /// Nothing was persisted yet; the example snippets were written.
    Seeded(usize),
    /// The document could not be parsed; the store started empty.
    Recovered { reason: String },
}

/// The authoritative, ordered snippet collection bound to one backend.
///
/// Every mutation rewrites the whole collection through the backend before
/// returning. If that write fails the in-memory change is undone, so memory
/// and storage never disagree.
pub struct SnippetStore<B: SnippetBackend> {
    backend: B,
    snippets: Vec<Snippet>,
    outcome: LoadOutcome,
}

impl<B: SnippetBackend> SnippetStore<B> {
    pub fn open(backend: B) -> Result<Self> {
        let (snippets, outcome) = match backend.load() {
            Ok(Some(snippets)) => {
                log::debug!(
                    "loaded {} snippets from {}",
                    snippets.len(),
                    backend.location()
                );
                let count = snippets.len();
                (snippets, LoadOutcome::Loaded(count))
            }
            Ok(None) => {
                let seeds = seed_snippets();
                backend.save(&seeds)?;
                log::debug!("seeded {} with {} snippets", backend.location(), seeds.len());
                let count = seeds.len();
                (seeds, LoadOutcome::Seeded(count))
            }
            Err(SnipzError::Serialization(e)) => {
                log::debug!(
                    "could not parse {}, starting with an empty collection: {}",
                    backend.location(),
                    e
                );
                (
                    Vec::new(),
                    LoadOutcome::Recovered {
                        reason: e.to_string(),
                    },
                )
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            backend,
            snippets,
            outcome,
        })
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    pub fn list_all(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Distinct raw language values, sorted. `Bash` and `bash` are distinct.
    pub fn list_languages(&self) -> Vec<String> {
        self.snippets
            .iter()
            .map(|s| s.language.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Each language from [`list_languages`](Self::list_languages) with the
    /// number of snippets [`list_by_language`](Self::list_by_language) yields
    /// for it.
    pub fn language_counts(&self) -> Vec<(String, usize)> {
        self.list_languages()
            .into_iter()
            .map(|language| {
                let count = self.list_by_language(&language).len();
                (language, count)
            })
            .collect()
    }

    pub fn list_by_language(&self, language: &str) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| language_matches(&s.language, language))
            .collect()
    }

    /// Substring search over title, language and tags, optionally restricted
    /// to one language. An empty query lists by language only.
    pub fn search(&self, query: &str, language: Option<&str>) -> Vec<&Snippet> {
        if query.is_empty() {
            return match language {
                Some(language) => self.list_by_language(language),
                None => self.snippets.iter().collect(),
            };
        }

        let language = language.filter(|l| !is_all_sentinel(l));
        self.snippets
            .iter()
            .filter(|s| s.matches_query(query))
            .filter(|s| language.map_or(true, |l| language_matches(&s.language, l)))
            .collect()
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    /// Highest id in the collection plus one (1 when empty). Gaps are never
    /// filled.
    pub fn next_id(&self) -> Result<i64> {
        self.snippets
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| SnipzError::Store("id space exhausted".to_string()))
    }

    pub fn add(&mut self, fields: NewSnippet) -> Result<Snippet> {
        let missing = fields.missing_fields();
        if !missing.is_empty() {
            return Err(SnipzError::Validation { missing });
        }

        let snippet = Snippet::new(self.next_id()?, fields);
        self.snippets.push(snippet.clone());
        if let Err(e) = self.persist() {
            self.snippets.pop();
            return Err(e);
        }
        Ok(snippet)
    }

    /// Apply `patch` to the snippet with `id`. Returns Ok(None) if there is
    /// no such snippet.
    pub fn update(&mut self, id: i64, patch: &SnippetPatch) -> Result<Option<Snippet>> {
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };

        let mut updated = self.snippets[pos].clone();
        patch.apply(&mut updated);
        let missing = updated.missing_fields();
        if !missing.is_empty() {
            return Err(SnipzError::Validation { missing });
        }

        let previous = std::mem::replace(&mut self.snippets[pos], updated.clone());
        if let Err(e) = self.persist() {
            self.snippets[pos] = previous;
            return Err(e);
        }
        Ok(Some(updated))
    }

    /// Remove the snippet with `id`. Returns Ok(false) if there is no such
    /// snippet, in which case nothing is written.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };

        let removed = self.snippets.remove(pos);
        if let Err(e) = self.persist() {
            self.snippets.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.snippets.iter().position(|s| s.id == id)
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.snippets)
    }
}
