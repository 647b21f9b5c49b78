use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Duplicate lexicon category: {name}")]
    DuplicateCategoryError { name: String },

    #[error("Lexicon category name cannot be empty")]
    EmptyCategoryNameError,

    #[error("Invalid input for {field}: {message}")]
    InvalidInputError { field: String, message: String },

    #[error("Bad request: {message}")]
    BadRequestError { message: String },

    #[error("Username already exists")]
    UsernameTakenError,

    #[error("Email already exists")]
    EmailTakenError,

    #[error("Invalid username or password")]
    InvalidCredentialsError,

    #[error("Request does not contain an access token: {details}")]
    MissingTokenError { details: String },

    #[error("Token expired for subject {subject}")]
    TokenExpiredError { subject: String },

    #[error("Invalid token: {details}")]
    InvalidTokenError { details: String },

    #[error("Invalid user identity")]
    InvalidIdentityError,

    #[error("Not found: {message}")]
    NotFoundError { message: String },

    #[error("Password hashing error: {message}")]
    PasswordHashError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Authentication,
    NotFound,
    Storage,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl JournalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            JournalError::InvalidConfigValueError { .. }
            | JournalError::ConfigValidationError { .. }
            | JournalError::DuplicateCategoryError { .. }
            | JournalError::EmptyCategoryNameError => ErrorCategory::Configuration,
            JournalError::InvalidInputError { .. }
            | JournalError::BadRequestError { .. }
            | JournalError::UsernameTakenError
            | JournalError::EmailTakenError => ErrorCategory::Validation,
            JournalError::InvalidCredentialsError
            | JournalError::MissingTokenError { .. }
            | JournalError::TokenExpiredError { .. }
            | JournalError::InvalidTokenError { .. }
            | JournalError::InvalidIdentityError => ErrorCategory::Authentication,
            JournalError::NotFoundError { .. } => ErrorCategory::NotFound,
            JournalError::IoError(_) | JournalError::DatabaseError(_) => ErrorCategory::Storage,
            JournalError::PasswordHashError { .. } | JournalError::InternalError { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Authentication => ErrorSeverity::Medium,
            ErrorCategory::Storage | ErrorCategory::Internal => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            JournalError::DuplicateCategoryError { .. } | JournalError::EmptyCategoryNameError => {
                "Check the [[lexicon.category]] tables: every category needs a unique, non-empty name"
            }
            JournalError::ConfigValidationError { .. } => {
                "Make sure the configuration file exists and is valid TOML"
            }
            JournalError::InvalidConfigValueError { .. } => {
                "Review the command line flags, environment variables and config file"
            }
            JournalError::DatabaseError(_) | JournalError::IoError(_) => {
                "Check that the database file is reachable and writable"
            }
            JournalError::MissingTokenError { .. }
            | JournalError::TokenExpiredError { .. }
            | JournalError::InvalidTokenError { .. }
            | JournalError::InvalidIdentityError => "Log in again to obtain a fresh access token",
            JournalError::InvalidCredentialsError => "Check the username and password",
            JournalError::UsernameTakenError => "Pick a different username",
            JournalError::EmailTakenError => "Use a different email address",
            JournalError::InvalidInputError { .. } | JournalError::BadRequestError { .. } => {
                "Send a JSON body with all required fields"
            }
            JournalError::NotFoundError { .. } => "Check the journal id",
            JournalError::PasswordHashError { .. } | JournalError::InternalError { .. } => {
                "Retry the request; report it if it persists"
            }
        }
    }

    /// 不洩漏內部細節的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Storage | ErrorCategory::Internal => {
                "An unexpected error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JournalError>;
