use crate::config::{
    validate_provider, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_JWT_SECRET,
    DEFAULT_TOKEN_TTL_SECS,
};
use crate::core::seed::default_seed;
use crate::core::{CategorySeed, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "journal-server")]
#[command(about = "Journaling service that scores entries against word-category lexicons")]
pub struct CliConfig {
    /// Path to a TOML configuration file; flags and env vars override its values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, visible_alias = "bind", env = "JOURNAL_BIND_ADDR", help = "Listen address [default: 127.0.0.1:5000]")]
    pub bind_addr: Option<String>,

    #[arg(long, env = "DATABASE_URI", help = "SQLite URL [default: sqlite://cognitive_app.db]")]
    pub database_url: Option<String>,

    #[arg(long, env = "SECRET_KEY", hide_env_values = true, help = "JWT signing secret [default: dev]")]
    pub jwt_secret: Option<String>,

    #[arg(long, env = "JWT_ACCESS_TOKEN_EXPIRES", help = "Access token lifetime in seconds [default: 86400]")]
    pub token_ttl_secs: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("config", &self.config)
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    fn jwt_secret(&self) -> &str {
        self.jwt_secret.as_deref().unwrap_or(DEFAULT_JWT_SECRET)
    }

    fn token_ttl_secs(&self) -> u64 {
        self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS)
    }

    fn lexicon_seed(&self) -> Vec<CategorySeed> {
        default_seed()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
