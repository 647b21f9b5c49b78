use crate::domain::model::{
    CategorySeed, JournalEntry, JournalScore, NewUser, ScoreResult, User,
};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the new user id. A unique violation on username or email
    /// surfaces as `UsernameTakenError` / `EmailTakenError`.
    async fn create_user(&self, user: NewUser) -> Result<i64>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// Stores the entry and its score together; neither is kept if the other fails.
    async fn create_entry(
        &self,
        user_id: i64,
        text: &str,
        score: &ScoreResult,
    ) -> Result<(JournalEntry, JournalScore)>;

    /// Newest first.
    async fn list_entries(&self, user_id: i64) -> Result<Vec<JournalEntry>>;

    /// `None` when the entry does not exist or belongs to someone else.
    async fn find_entry(&self, user_id: i64, journal_id: i64) -> Result<Option<JournalEntry>>;

    async fn find_score(&self, journal_id: i64) -> Result<Option<JournalScore>>;
}

/// Resolved service settings, whichever source they came from.
pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn database_url(&self) -> &str;
    fn jwt_secret(&self) -> &str;
    fn token_ttl_secs(&self) -> u64;
    fn lexicon_seed(&self) -> Vec<CategorySeed>;
}
