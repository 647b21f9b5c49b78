use crate::domain::model::{JournalEntry, JournalScore, NewUser, ScoreResult, User};
use crate::domain::ports::{JournalRepository, UserRepository};
use crate::utils::error::{JournalError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    journals: Vec<JournalEntry>,
    scores: HashMap<i64, JournalScore>,
    next_user_id: i64,
    next_journal_id: i64,
}

/// Process-local store, for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<i64> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|u| u.username == user.username) {
            return Err(JournalError::UsernameTakenError);
        }
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(JournalError::EmailTakenError);
        }

        state.next_user_id += 1;
        let id = state.next_user_id;
        state.users.push(User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl JournalRepository for MemoryStore {
    async fn create_entry(
        &self,
        user_id: i64,
        text: &str,
        score: &ScoreResult,
    ) -> Result<(JournalEntry, JournalScore)> {
        let mut state = self.state.write().await;
        let now = Utc::now();

        state.next_journal_id += 1;
        let entry = JournalEntry {
            id: state.next_journal_id,
            user_id,
            text: text.to_string(),
            created_at: now,
        };
        let score = JournalScore::from_result(entry.id, score, now);

        state.journals.push(entry.clone());
        state.scores.insert(entry.id, score.clone());
        Ok((entry, score))
    }

    async fn list_entries(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        let state = self.state.read().await;
        let mut entries: Vec<JournalEntry> = state
            .journals
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(entries)
    }

    async fn find_entry(&self, user_id: i64, journal_id: i64) -> Result<Option<JournalEntry>> {
        let state = self.state.read().await;
        Ok(state
            .journals
            .iter()
            .find(|e| e.id == journal_id && e.user_id == user_id)
            .cloned())
    }

    async fn find_score(&self, journal_id: i64) -> Result<Option<JournalScore>> {
        let state = self.state.read().await;
        Ok(state.scores.get(&journal_id).cloned())
    }
}
