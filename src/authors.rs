//! Author-frequency analysis over the `author` field.
//!
//! BibTeX author strings come in three shapes: `A and B and C` (standard),
//! `A; B; C`, and `A, B, C`. Splitting prefers the `and` form, then
//! semicolons, then commas; names are lower-cased with collapsed whitespace
//! so the same author spelled twice counts once per appearance.

use indexmap::IndexMap;

use crate::constants::fields;
use crate::data::BibRecord;
use crate::types::AuthorName;
use crate::utils::normalize_inline_whitespace;

/// One author with their appearance count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorCount {
    /// Normalized author name.
    pub name: AuthorName,
    /// Number of records the author appeared on.
    pub appearances: usize,
}

/// Extract every normalized author name across the records, in record order.
pub fn extract_authors(records: &[BibRecord]) -> Vec<AuthorName> {
    let mut authors = Vec::new();
    for record in records {
        let Some(raw) = record.value(fields::AUTHOR) else {
            continue;
        };
        let text = normalize_inline_whitespace(raw).to_lowercase();
        let parts: Vec<&str> = if text.contains(" and ") {
            text.split(" and ").collect()
        } else if text.contains(';') {
            text.split(';').collect()
        } else {
            text.split(',').collect()
        };
        for part in parts {
            let name = part.trim();
            if !name.is_empty() {
                authors.push(name.to_string());
            }
        }
    }
    authors
}

/// Count appearances and keep the `limit` most frequent authors.
///
/// Selection is by descending count with ties in first-seen order; the
/// surviving entries are then presented ascending by `(count, name)`.
pub fn top_authors(authors: &[AuthorName], limit: usize) -> Vec<AuthorCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for author in authors {
        *counts.entry(author.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .map(|(name, appearances)| AuthorCount {
            name: name.to_string(),
            appearances,
        })
        .collect()
}
