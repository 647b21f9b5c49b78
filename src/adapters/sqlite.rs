use crate::domain::model::{JournalEntry, JournalScore, NewUser, ScoreResult, User};
use crate::domain::ports::{JournalRepository, UserRepository};
use crate::utils::error::{JournalError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS journals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        text TEXT NOT NULL,
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_journals_user_created
        ON journals (user_id, created_at)"#,
    r#"CREATE TABLE IF NOT EXISTS journal_scores (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        journal_id INTEGER NOT NULL UNIQUE REFERENCES journals(id),
        positive_emotion INTEGER NOT NULL DEFAULT 0,
        negative_emotion INTEGER NOT NULL DEFAULT 0,
        social INTEGER NOT NULL DEFAULT 0,
        cognitive INTEGER NOT NULL DEFAULT 0,
        total_score INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )"#,
];

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct JournalRow {
    id: i64,
    user_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<JournalRow> for JournalEntry {
    fn from(row: JournalRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct ScoreRow {
    journal_id: i64,
    positive_emotion: u32,
    negative_emotion: u32,
    social: u32,
    cognitive: u32,
    total_score: u32,
    created_at: DateTime<Utc>,
}

impl From<ScoreRow> for JournalScore {
    fn from(row: ScoreRow) -> Self {
        Self {
            journal_id: row.journal_id,
            positive_emotion: row.positive_emotion,
            negative_emotion: row.negative_emotion,
            social: row.social,
            cognitive: row.cognitive,
            total: row.total_score,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// 連線並建立資料表；`sqlite::memory:` 只開一條連線，確保所有請求共用同一個資料庫
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(%database_url, in_memory, "database pool ready");

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(*statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn map_user_insert_error(err: sqlx::Error) -> JournalError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            if db.message().contains("users.email") {
                return JournalError::EmailTakenError;
            }
            return JournalError::UsernameTakenError;
        }
    }
    JournalError::DatabaseError(err)
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn create_user(&self, user: NewUser) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_user_insert_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}

#[async_trait]
impl JournalRepository for SqliteStore {
    async fn create_entry(
        &self,
        user_id: i64,
        text: &str,
        score: &ScoreResult,
    ) -> Result<(JournalEntry, JournalScore)> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let journal_id =
            sqlx::query("INSERT INTO journals (user_id, text, created_at) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(text)
                .bind(now)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();

        let journal_score = JournalScore::from_result(journal_id, score, now);
        sqlx::query(
            r#"INSERT INTO journal_scores
                (journal_id, positive_emotion, negative_emotion, social, cognitive, total_score, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(journal_id)
        .bind(journal_score.positive_emotion)
        .bind(journal_score.negative_emotion)
        .bind(journal_score.social)
        .bind(journal_score.cognitive)
        .bind(journal_score.total)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let entry = JournalEntry {
            id: journal_id,
            user_id,
            text: text.to_string(),
            created_at: now,
        };
        Ok((entry, journal_score))
    }

    async fn list_entries(&self, user_id: i64) -> Result<Vec<JournalEntry>> {
        let rows = sqlx::query_as::<_, JournalRow>(
            "SELECT id, user_id, text, created_at FROM journals \
             WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(JournalEntry::from).collect())
    }

    async fn find_entry(&self, user_id: i64, journal_id: i64) -> Result<Option<JournalEntry>> {
        let row = sqlx::query_as::<_, JournalRow>(
            "SELECT id, user_id, text, created_at FROM journals WHERE id = ? AND user_id = ?",
        )
        .bind(journal_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(JournalEntry::from))
    }

    async fn find_score(&self, journal_id: i64) -> Result<Option<JournalScore>> {
        let row = sqlx::query_as::<_, ScoreRow>(
            "SELECT journal_id, positive_emotion, negative_emotion, social, cognitive, \
             total_score, created_at FROM journal_scores WHERE journal_id = ?",
        )
        .bind(journal_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(JournalScore::from))
    }
}
