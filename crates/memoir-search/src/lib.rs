//! Memoir Search — prefix filtering over the roster.
//!
//! The search surface is deliberately small: a case-insensitive prefix
//! match over a single selected field, returning matches in roster order.
//! No fuzzy matching, no substring matching, and an empty query yields an
//! empty result set rather than the full roster.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

use memoir_core::Person;
use serde::{Deserialize, Serialize};

mod proptests;

/// Which person field a query matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Match against the display name.
    #[default]
    Name,
    /// Match against the identifier.
    Identifier,
}

impl SearchField {
    /// The selected field's value for a person.
    pub fn value_of(self, person: &Person) -> &str {
        match self {
            SearchField::Name => &person.display_name,
            SearchField::Identifier => &person.identifier,
        }
    }
}

/// Filter people whose selected field starts with the query,
/// case-insensitively.
///
/// Matches are returned in roster order. The empty query returns an empty
/// result set — never the full roster.
pub fn filter_prefix<'a>(people: &'a [Person], query: &str, field: SearchField) -> Vec<&'a Person> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|person| field.value_of(person).to_lowercase().starts_with(&needle))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
