//! In-memory word lexicon, built once at startup and read-only afterwards.

use crate::domain::model::CategorySeed;
use crate::utils::error::{JournalError, Result};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Category {
    name: String,
    words: HashSet<String>,
}

/// Category name → set of lowercase member words, in seed order.
///
/// There is no mutating API; share it behind an `Arc` once loaded.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    categories: Vec<Category>,
}

impl LexiconStore {
    /// Builds the store from `(name, words)` pairs.
    ///
    /// Fails on an empty or repeated category name. Words are lowercased and
    /// repeated words collapse into one entry.
    pub fn load<I, N, W, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, W)>,
        N: Into<String>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loaded: Vec<Category> = Vec::new();

        for (name, words) in categories {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(JournalError::EmptyCategoryNameError);
            }
            if loaded.iter().any(|c| c.name == name) {
                return Err(JournalError::DuplicateCategoryError { name });
            }

            let words = words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect();
            loaded.push(Category { name, words });
        }

        Ok(Self { categories: loaded })
    }

    pub fn from_seeds(seeds: &[CategorySeed]) -> Result<Self> {
        Self::load(seeds.iter().map(|s| (s.name.clone(), s.words.iter())))
    }

    /// `(name, words)` in load order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> + '_ {
        self.categories.iter().map(|c| (c.name.as_str(), &c.words))
    }

    pub fn category(&self, name: &str) -> Option<&HashSet<String>> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| &c.words)
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Distinct words summed over all categories.
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|c| c.words.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_lowercases_and_collapses_words() {
        let store =
            LexiconStore::load(vec![("positive_emotion", vec!["Happy", "happy", "JOY"])]).unwrap();

        let words = store.category("positive_emotion").unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("happy"));
        assert!(words.contains("joy"));
    }

    #[test]
    fn test_categories_keep_load_order() {
        let store = LexiconStore::load(vec![
            ("social", vec!["friend"]),
            ("cognitive", vec!["think"]),
            ("positive_emotion", vec!["joy"]),
        ])
        .unwrap();

        assert_eq!(store.names(), vec!["social", "cognitive", "positive_emotion"]);
        let first = store.categories().next().unwrap();
        assert_eq!(first.0, "social");
        assert!(first.1.contains("friend"));
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let err = LexiconStore::load(vec![("social", vec!["friend"]), ("social", vec!["team"])])
            .unwrap_err();
        assert!(matches!(err, JournalError::DuplicateCategoryError { ref name } if name == "social"));
    }

    #[test]
    fn test_empty_category_name_is_rejected() {
        let err = LexiconStore::load(vec![("  ", vec!["friend"])]).unwrap_err();
        assert!(matches!(err, JournalError::EmptyCategoryNameError));
    }

    #[test]
    fn test_empty_category_is_allowed() {
        let store = LexiconStore::load(vec![("cognitive", Vec::<&str>::new())]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.word_count(), 0);
    }

    #[test]
    fn test_from_seeds() {
        let seeds = vec![
            CategorySeed::new("social", ["Friend", "team"]),
            CategorySeed::new("cognitive", ["think"]),
        ];
        let store = LexiconStore::from_seeds(&seeds).unwrap();
        assert_eq!(store.word_count(), 3);
        assert!(store.category("social").unwrap().contains("friend"));
        assert!(store.category("missing").is_none());
    }
}
