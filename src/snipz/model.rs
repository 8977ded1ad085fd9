use serde::{Deserialize, Serialize};

/// Language filter value meaning "no language restriction".
pub const ALL_LANGUAGES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub code: String,
    pub tags: Vec<String>,
}

impl Snippet {
    pub fn new(id: i64, fields: NewSnippet) -> Self {
        Self {
            id,
            title: fields.title,
            language: fields.language,
            code: fields.code,
            tags: fields.tags,
        }
    }

    /// Case-insensitive substring match against title, language and tags.
    /// The code body is not searched.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.language.to_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(&self.title, &self.language, &self.code)
    }
}

/// True when `language` passes `filter`: either the filter is the `all`
/// sentinel (any case) or both are equal ignoring case.
pub fn language_matches(language: &str, filter: &str) -> bool {
    is_all_sentinel(filter) || language.to_lowercase() == filter.to_lowercase()
}

pub fn is_all_sentinel(filter: &str) -> bool {
    filter.eq_ignore_ascii_case(ALL_LANGUAGES)
}

fn missing_fields(title: &str, language: &str, code: &str) -> Vec<&'static str> {
    [("title", title), ("language", language), ("code", code)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Fields for a snippet that has not been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
    pub tags: Vec<String>,
}

impl NewSnippet {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
            tags,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(&self.title, &self.language, &self.code)
    }
}

/// Partial update for a snippet. Only fields that are `Some` are applied.
///
/// When deserialized from JSON, unknown keys (including `id`) are ignored,
/// so a patch can never change a snippet's identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnippetPatch {
    pub title: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl SnippetPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.language.is_none()
            && self.code.is_none()
            && self.tags.is_none()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn apply(&self, snippet: &mut Snippet) {
        if let Some(title) = &self.title {
            snippet.title = title.clone();
        }
        if let Some(language) = &self.language {
            snippet.language = language.clone();
        }
        if let Some(code) = &self.code {
            snippet.code = code.clone();
        }
        if let Some(tags) = &self.tags {
            snippet.tags = tags.clone();
        }
    }
}
