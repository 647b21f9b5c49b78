pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use app::JournalServer;
pub use core::analyzer::{score, tokenize, TextAnalyzer};
pub use core::lexicon::LexiconStore;
pub use domain::model::ScoreResult;
pub use utils::error::{JournalError, Result};
