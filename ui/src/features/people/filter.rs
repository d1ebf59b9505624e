use tracing::trace;

use super::types::Person;

/// Records whose name contains `query`, ignoring case, in their original order.
/// An empty query matches everyone.
pub fn filter_people<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    let needle = query.to_lowercase();
    let matches: Vec<&Person> = people
        .iter()
        .filter(|person| person.name.to_lowercase().contains(&needle))
        .collect();
    trace!(query, matched = matches.len(), "filtered people");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::people::PEOPLE;

    fn names(query: &str) -> Vec<&'static str> {
        filter_people(&PEOPLE, query)
            .into_iter()
            .map(|person| person.name)
            .collect()
    }

    #[test]
    fn test_substring_match_keeps_order() {
        assert_eq!(names("e"), vec!["Alice", "Charlie", "Eve"]);
    }

    #[test]
    fn test_match_ignores_case() {
        assert_eq!(names("E"), vec!["Alice", "Charlie", "Eve"]);
        assert_eq!(names("bOB"), vec!["Bob"]);
        assert_eq!(names("LI"), vec!["Alice", "Charlie"]);
    }

    #[test]
    fn test_empty_query_returns_everyone() {
        assert_eq!(names(""), vec!["Alice", "Bob", "Charlie", "Diana", "Eve"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(names("zz").is_empty());
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(names(" ").is_empty());
    }
}
