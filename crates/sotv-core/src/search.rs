//! Free-text strain search.
//!
//! Only the input side exists: the query is normalized and, once long enough,
//! acknowledged with a placeholder. The search backend is not wired up.

/// What the search results area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    /// Query accepted; results are not available yet.
    Placeholder { query: String },
}

impl SearchResults {
    pub fn render(&self) -> String {
        match self {
            SearchResults::Placeholder { query } => format!(
                "Searching for \"{query}\"...\nFull search functionality will be available after the search service is deployed."
            ),
        }
    }
}

/// Trim and lower-case `raw`; `None` when shorter than `min_chars` characters.
pub fn normalize_query(raw: &str, min_chars: usize) -> Option<String> {
    let query = raw.trim().to_lowercase();
    if query.chars().count() < min_chars {
        return None;
    }
    Some(query)
}
