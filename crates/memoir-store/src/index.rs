//! Order-preserving index over the roster.
//!
//! Built once from the roster document and read-only thereafter. Lookup is
//! by identifier; iteration yields people in roster order, which is the
//! order search results are presented in.

use std::collections::HashMap;

use memoir_core::Person;

/// Identifier → person index that preserves roster order.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    people: Vec<Person>,
    by_identifier: HashMap<String, usize>,
}

impl RosterIndex {
    /// Build the index from roster entries.
    ///
    /// Identifiers are expected to be unique. A duplicate is tolerated:
    /// the later entry replaces the earlier one at its original position,
    /// and the collision is logged.
    pub fn from_people(people: Vec<Person>) -> Self {
        let mut by_identifier: HashMap<String, usize> = HashMap::with_capacity(people.len());
        let mut unique: Vec<Person> = Vec::with_capacity(people.len());

        for person in people {
            match by_identifier.get(&person.identifier) {
                Some(&pos) => {
                    log::warn!(
                        "Duplicate roster identifier '{}': keeping the later entry",
                        person.identifier
                    );
                    unique[pos] = person;
                }
                None => {
                    by_identifier.insert(person.identifier.clone(), unique.len());
                    unique.push(person);
                }
            }
        }

        Self {
            people: unique,
            by_identifier,
        }
    }

    /// Look up a person by identifier.
    pub fn get(&self, identifier: &str) -> Option<&Person> {
        self.by_identifier
            .get(identifier)
            .map(|&pos| &self.people[pos])
    }

    /// Returns `true` if the identifier is present in the roster.
    pub fn contains(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// All people, in roster order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Number of distinct people in the roster.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn person(identifier: &str, display_name: &str) -> Person {
        Person {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn test_lookup_returns_exact_person() {
        let index = RosterIndex::from_people(vec![
            person("16CS001", "Asha Rao"),
            person("16EC042", "Bimal Nair"),
        ]);

        // Every roster identifier resolves to exactly its person.
        for p in index.people() {
            assert_eq!(index.get(&p.identifier), Some(p));
        }
    }

    #[test]
    fn test_lookup_unknown_identifier() {
        let index = RosterIndex::from_people(vec![person("16CS001", "Asha Rao")]);
        assert_eq!(index.get("99XX999"), None);
        assert!(!index.contains("99XX999"));
    }

    #[test]
    fn test_roster_order_preserved() {
        let index = RosterIndex::from_people(vec![
            person("c", "Third"),
            person("a", "First"),
            person("b", "Second"),
        ]);
        let names: Vec<&str> = index
            .people()
            .iter()
            .map(|p| p.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn test_duplicate_identifier_last_wins_in_place() {
        let index = RosterIndex::from_people(vec![
            person("a", "First A"),
            person("b", "Only B"),
            person("a", "Second A"),
        ]);

        // Later value, original position, no duplicate row.
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("a").unwrap().display_name, "Second A");
        assert_eq!(index.people()[0].display_name, "Second A");
        assert_eq!(index.people()[1].display_name, "Only B");
    }

    #[test]
    fn test_empty_roster() {
        let index = RosterIndex::from_people(vec![]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.get("anything"), None);
    }
}
