#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::lexicon::LexiconStore;
use crate::core::ConfigProvider;
use crate::domain::model::{CategorySeed, CATEGORY_NAMES};
use crate::utils::error::{JournalError, Result};
use crate::utils::validation::{
    validate_database_url, validate_non_empty_string, validate_positive_number,
    validate_socket_addr,
};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://cognitive_app.db";
pub const DEFAULT_JWT_SECRET: &str = "dev";
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

/// 檢查詞庫：名稱唯一且非空，並且正好是四個固定分類
pub fn validate_lexicon_seed(seeds: &[CategorySeed]) -> Result<()> {
    LexiconStore::from_seeds(seeds)?;

    let mut names: Vec<&str> = seeds.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    let mut expected = CATEGORY_NAMES.to_vec();
    expected.sort_unstable();

    if names != expected {
        return Err(JournalError::InvalidConfigValueError {
            field: "lexicon.category".to_string(),
            value: names.join(", "),
            reason: format!("Categories must be exactly: {}", CATEGORY_NAMES.join(", ")),
        });
    }
    Ok(())
}

/// Checks every value a provider hands out.
pub fn validate_provider(config: &dyn ConfigProvider) -> Result<()> {
    validate_socket_addr("server.bind_addr", config.bind_addr())?;
    validate_database_url("database.url", config.database_url())?;
    validate_non_empty_string("auth.jwt_secret", config.jwt_secret())?;
    validate_positive_number("auth.token_ttl_secs", config.token_ttl_secs(), 1)?;
    validate_lexicon_seed(&config.lexicon_seed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::default_seed;

    #[test]
    fn test_default_seed_is_valid() {
        assert!(validate_lexicon_seed(&default_seed()).is_ok());
    }

    #[test]
    fn test_seed_order_does_not_matter() {
        let mut seeds = default_seed();
        seeds.reverse();
        assert!(validate_lexicon_seed(&seeds).is_ok());
    }

    #[test]
    fn test_unknown_or_missing_category_is_rejected() {
        let mut seeds = default_seed();
        seeds.pop();
        assert!(validate_lexicon_seed(&seeds).is_err());

        seeds.push(CategorySeed::new("humor", ["funny"]));
        assert!(validate_lexicon_seed(&seeds).is_err());
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let mut seeds = default_seed();
        seeds.push(CategorySeed::new("social", ["friend"]));
        let err = validate_lexicon_seed(&seeds).unwrap_err();
        assert!(matches!(err, JournalError::DuplicateCategoryError { .. }));
    }
}
