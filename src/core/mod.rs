pub mod analyzer;
pub mod auth;
pub mod journal;
pub mod lexicon;
pub mod seed;
pub mod token;

pub use crate::domain::model::{CategorySeed, JournalEntry, JournalScore, ScoreResult};
pub use crate::domain::ports::{ConfigProvider, JournalRepository, UserRepository};
pub use crate::utils::error::Result;
