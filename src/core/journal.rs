use crate::core::analyzer::TextAnalyzer;
use crate::domain::model::{JournalEntry, JournalScore};
use crate::domain::ports::JournalRepository;
use crate::utils::error::{JournalError, Result};
use std::sync::Arc;

/// An entry together with its score, when one was stored.
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub entry: JournalEntry,
    pub score: Option<JournalScore>,
}

#[derive(Clone)]
pub struct JournalService {
    journals: Arc<dyn JournalRepository>,
    analyzer: TextAnalyzer,
}

impl JournalService {
    pub fn new(journals: Arc<dyn JournalRepository>, analyzer: TextAnalyzer) -> Self {
        Self { journals, analyzer }
    }

    pub fn analyzer(&self) -> &TextAnalyzer {
        &self.analyzer
    }

    /// Scores `text` and stores it for `user_id`.
    pub async fn create(&self, user_id: i64, text: &str) -> Result<(JournalEntry, JournalScore)> {
        if text.trim().is_empty() {
            return Err(JournalError::BadRequestError {
                message: "Journal text cannot be empty".to_string(),
            });
        }

        let result = self.analyzer.analyze(text);
        let (entry, score) = self.journals.create_entry(user_id, text, &result).await?;

        tracing::info!(
            journal_id = entry.id,
            user_id,
            total = score.total,
            "journal entry created"
        );
        Ok((entry, score))
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        self.journals.list_entries(user_id).await
    }

    pub async fn get(&self, user_id: i64, journal_id: i64) -> Result<ScoredEntry> {
        let entry = self.owned_entry(user_id, journal_id).await?;
        let score = self.journals.find_score(entry.id).await?;
        Ok(ScoredEntry { entry, score })
    }

    pub async fn get_score(&self, user_id: i64, journal_id: i64) -> Result<JournalScore> {
        let entry = self.owned_entry(user_id, journal_id).await?;
        self.journals
            .find_score(entry.id)
            .await?
            .ok_or_else(|| JournalError::NotFoundError {
                message: "No score available for this journal".to_string(),
            })
    }

    async fn owned_entry(&self, user_id: i64, journal_id: i64) -> Result<JournalEntry> {
        self.journals
            .find_entry(user_id, journal_id)
            .await?
            .ok_or_else(|| JournalError::NotFoundError {
                message: "Journal not found or unauthorized".to_string(),
            })
    }
}
