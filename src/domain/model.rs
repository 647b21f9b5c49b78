use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const POSITIVE_EMOTION: &str = "positive_emotion";
pub const NEGATIVE_EMOTION: &str = "negative_emotion";
pub const SOCIAL: &str = "social";
pub const COGNITIVE: &str = "cognitive";

/// The fixed category names a persisted score row has columns for.
pub const CATEGORY_NAMES: [&str; 4] = [POSITIVE_EMOTION, NEGATIVE_EMOTION, SOCIAL, COGNITIVE];

/// One lexicon category as it appears in seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    #[serde(default)]
    pub words: Vec<String>,
}

impl CategorySeed {
    pub fn new<N, I, W>(name: N, words: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-category counts for one piece of text.
///
/// Serializes flat: `{"cognitive": 1, "social": 1, ..., "total": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(flatten)]
    pub categories: BTreeMap<String, u32>,
    pub total: u32,
}

impl ScoreResult {
    /// Count for `category`; categories absent from the lexicon read as 0.
    pub fn get(&self, category: &str) -> u32 {
        self.categories.get(category).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub id: i64,
    #[serde(skip)]
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Persisted score row, one per journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalScore {
    #[serde(skip)]
    pub journal_id: i64,
    pub positive_emotion: u32,
    pub negative_emotion: u32,
    pub social: u32,
    pub cognitive: u32,
    pub total: u32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl JournalScore {
    pub fn from_result(journal_id: i64, result: &ScoreResult, created_at: DateTime<Utc>) -> Self {
        Self {
            journal_id,
            positive_emotion: result.get(POSITIVE_EMOTION),
            negative_emotion: result.get(NEGATIVE_EMOTION),
            social: result.get(SOCIAL),
            cognitive: result.get(COGNITIVE),
            total: result.total,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_result_serializes_flat() {
        let mut categories = BTreeMap::new();
        categories.insert(COGNITIVE.to_string(), 1);
        categories.insert(SOCIAL.to_string(), 1);
        let result = ScoreResult {
            categories,
            total: 2,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({"cognitive": 1, "social": 1, "total": 2}));
    }

    #[test]
    fn test_journal_score_defaults_missing_categories_to_zero() {
        let mut categories = BTreeMap::new();
        categories.insert(POSITIVE_EMOTION.to_string(), 3);
        let result = ScoreResult {
            categories,
            total: 3,
        };

        let score = JournalScore::from_result(7, &result, Utc::now());
        assert_eq!(score.journal_id, 7);
        assert_eq!(score.positive_emotion, 3);
        assert_eq!(score.negative_emotion, 0);
        assert_eq!(score.total, 3);

        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "positive_emotion": 3,
                "negative_emotion": 0,
                "social": 0,
                "cognitive": 0,
                "total": 3
            })
        );
    }
}
