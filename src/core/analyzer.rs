use crate::core::lexicon::LexiconStore;
use crate::domain::model::ScoreResult;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

// `\w` is Unicode-aware in the regex crate.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Lowercases `text` and returns its maximal word-character runs, left to right.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Counts, per category, the tokens of `text` that belong to it.
///
/// Every occurrence counts. A token listed under several categories counts
/// once in each, and `total` is the sum of the category counts.
pub fn score(text: &str, store: &LexiconStore) -> ScoreResult {
    let tokens = tokenize(text);
    let mut result = ScoreResult::default();

    for (name, words) in store.categories() {
        let count = tokens.iter().filter(|t| words.contains(t.as_str())).count() as u32;
        result.categories.insert(name.to_string(), count);
        result.total += count;
    }

    result
}

/// Scores text against a shared, already-loaded lexicon.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    lexicon: Arc<LexiconStore>,
}

impl TextAnalyzer {
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }

    pub fn analyze(&self, text: &str) -> ScoreResult {
        let result = score(text, &self.lexicon);
        tracing::debug!(total = result.total, "analyzed text");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_lexicon() -> LexiconStore {
        LexiconStore::load(vec![
            ("positive_emotion", vec!["happy", "joy", "love"]),
            ("negative_emotion", vec!["sad", "angry", "fear"]),
            ("social", vec!["friend", "family", "team"]),
            ("cognitive", vec!["think", "know", "believe"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_tokenize_text() {
        assert_eq!(
            tokenize("Hello, world! This is a test."),
            vec!["hello", "world", "this", "is", "a", "test"]
        );
    }

    #[test]
    fn test_tokenize_edge_cases() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!... --- ").is_empty());
        assert_eq!(tokenize("snake_case and 42nd"), vec!["snake_case", "and", "42nd"]);
        assert_eq!(tokenize("co-worker"), vec!["co", "worker"]);
        assert_eq!(tokenize("Café ÜBER naïve"), vec!["café", "über", "naïve"]);
    }

    #[test]
    fn test_analyze_text() {
        let lexicon = test_lexicon();

        let scores = score("I am happy and I know it.", &lexicon);
        assert_eq!(scores.get("positive_emotion"), 1);
        assert_eq!(scores.get("cognitive"), 1);
        assert_eq!(scores.total, 2);

        let scores = score("I believe my friend is happy but my family is sad.", &lexicon);
        assert_eq!(scores.get("positive_emotion"), 1);
        assert_eq!(scores.get("negative_emotion"), 1);
        assert_eq!(scores.get("social"), 2);
        assert_eq!(scores.get("cognitive"), 1);
        assert_eq!(scores.total, 5);
    }

    #[test]
    fn test_empty_text_scores_zero_in_every_category() {
        let scores = score("", &test_lexicon());
        assert_eq!(scores.categories.len(), 4);
        assert!(scores.categories.values().all(|&c| c == 0));
        assert_eq!(scores.total, 0);
    }

    #[test]
    fn test_repeated_tokens_count_each_time() {
        let scores = score("Happy happy HAPPY joy", &test_lexicon());
        assert_eq!(scores.get("positive_emotion"), 4);
        assert_eq!(scores.total, 4);
    }

    #[test]
    fn test_overlapping_categories_count_in_each() {
        let lexicon =
            LexiconStore::load(vec![("a", vec!["team", "think"]), ("b", vec!["team"])]).unwrap();

        let scores = score("team think", &lexicon);
        assert_eq!(scores.get("a"), 2);
        assert_eq!(scores.get("b"), 1);
        assert_eq!(scores.total, 3);
    }

    #[test]
    fn test_analyzer_is_idempotent() {
        let analyzer = TextAnalyzer::new(Arc::new(test_lexicon()));
        let text = "I think about my friend often.";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
        assert_eq!(analyzer.analyze(text).total, 2);
    }
}
