use crate::config::{
    validate_provider, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_JWT_SECRET,
    DEFAULT_TOKEN_TTL_SECS,
};
use crate::core::seed::default_seed;
use crate::core::{CategorySeed, ConfigProvider};
use crate::utils::error::{JournalError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub lexicon: LexiconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

/// `[[lexicon.category]]` 表格；留空時使用內建詞庫
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub category: Vec<CategorySeed>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(JournalError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| JournalError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SECRET_KEY})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 命令列與環境變數的值優先於檔案內容
    #[cfg(feature = "cli")]
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(addr) = &cli.bind_addr {
            self.server.bind_addr = addr.clone();
        }
        if let Some(url) = &cli.database_url {
            self.database.url = url.clone();
        }
        if let Some(secret) = &cli.jwt_secret {
            self.auth.jwt_secret = secret.clone();
        }
        if let Some(ttl) = cli.token_ttl_secs {
            self.auth.token_ttl_secs = ttl;
        }
    }

    pub fn has_custom_lexicon(&self) -> bool {
        !self.lexicon.category.is_empty()
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_addr(&self) -> &str {
        &self.server.bind_addr
    }

    fn database_url(&self) -> &str {
        &self.database.url
    }

    fn jwt_secret(&self) -> &str {
        &self.auth.jwt_secret
    }

    fn token_ttl_secs(&self) -> u64 {
        self.auth.token_ttl_secs
    }

    fn lexicon_seed(&self) -> Vec<CategorySeed> {
        if self.has_custom_lexicon() {
            self.lexicon.category.clone()
        } else {
            default_seed()
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CUSTOM_LEXICON: &str = r#"
[server]
bind_addr = "0.0.0.0:8000"

[[lexicon.category]]
name = "positive_emotion"
words = ["Sunny", "calm"]

[[lexicon.category]]
name = "negative_emotion"
words = ["gloomy"]

[[lexicon.category]]
name = "social"
words = ["team"]

[[lexicon.category]]
name = "cognitive"
words = ["ponder"]
"#;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret(), DEFAULT_JWT_SECRET);
        assert_eq!(config.token_ttl_secs(), DEFAULT_TOKEN_TTL_SECS);
        assert!(!config.has_custom_lexicon());
        assert_eq!(config.lexicon_seed().len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_custom_lexicon() {
        let config = TomlConfig::from_toml_str(CUSTOM_LEXICON).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.has_custom_lexicon());
        let seeds = config.lexicon_seed();
        assert_eq!(seeds[0].name, "positive_emotion");
        assert_eq!(seeds[0].words, vec!["Sunny", "calm"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JOURNAL_TEST_SECRET", "s3cret");

        let toml_content = r#"
[auth]
jwt_secret = "${JOURNAL_TEST_SECRET}"
token_ttl_secs = 120
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.jwt_secret(), "s3cret");
        assert_eq!(config.token_ttl_secs(), 120);
        assert!(!format!("{:?}", config).contains("s3cret"));

        std::env::remove_var("JOURNAL_TEST_SECRET");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[database]
url = "${JOURNAL_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.database_url(), "${JOURNAL_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[auth]\ntoken_ttl_secs = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[server]\nbind_addr = \"localhost\"\n").unwrap();
        assert!(config.validate().is_err());

        let partial = r#"
[[lexicon.category]]
name = "social"
words = ["friend"]
"#;
        let config = TomlConfig::from_toml_str(partial).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[server\nbind_addr = 1").unwrap_err();
        assert!(matches!(
            err,
            JournalError::ConfigValidationError { ref field, .. } if field == "toml_parsing"
        ));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = TomlConfig::from_toml_str(CUSTOM_LEXICON).unwrap();
        let cli = crate::config::CliConfig {
            bind_addr: Some("127.0.0.1:9000".to_string()),
            token_ttl_secs: Some(30),
            ..Default::default()
        };

        config.apply_overrides(&cli);

        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.token_ttl_secs(), 30);
        assert!(config.has_custom_lexicon());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[database]\nurl = \"sqlite::memory:\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
    }
}
