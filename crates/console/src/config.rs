//! Runtime configuration, read from `GOLDLINE_*` environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `GOLDLINE_LOGIN` | `AlexSmirnov` |
//! | `GOLDLINE_PASSWORD` | `pass123` |
//! | `GOLDLINE_DISPLAY_NAME` | `Алексей Смирнов` |
//! | `GOLDLINE_ROLE` | `Старший менеджер` |
//! | `GOLDLINE_OPENING_HOUR` | `9` |
//! | `GOLDLINE_CLOSING_HOUR` | `21` |
//! | `GOLDLINE_BUCKET_HOURS` | `2` |
//! | `GOLDLINE_LOG_FORMAT` | `json` |

use thiserror::Error;

use goldline_auth::{FixedCredential, Profile, Role, check_credential_shape};
use goldline_core::ValidationError;
use goldline_observability::{LogFormat, UnknownLogFormat};
use goldline_sales::HourBuckets;

const DEFAULT_LOGIN: &str = "AlexSmirnov";
const DEFAULT_PASSWORD: &str = "pass123";
const DEFAULT_DISPLAY_NAME: &str = "Алексей Смирнов";
const DEFAULT_ROLE: &str = "Старший менеджер";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },

    #[error("GOLDLINE_LOG_FORMAT: {0}")]
    LogFormat(#[from] UnknownLogFormat),

    #[error("invalid opening hours: {0}")]
    Schedule(#[from] ValidationError),

    /// The configured login/password could never pass the login form.
    #[error("configured account cannot sign in: {0}")]
    Credential(ValidationError),
}

#[derive(Clone)]
pub struct ConsoleConfig {
    pub login: String,
    pub password: String,
    pub display_name: String,
    pub role: String,
    pub buckets: HourBuckets,
    pub log_format: LogFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            role: DEFAULT_ROLE.to_string(),
            buckets: HourBuckets::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl core::fmt::Debug for ConsoleConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConsoleConfig")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .field("buckets", &self.buckets)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl ConsoleConfig {
    /// Read the process environment; unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Surrounding whitespace is dropped, except in the password.
        let raw = |key: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(key) {
                None => Ok(default.to_string()),
                Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { key }),
                Some(v) => Ok(v),
            }
        };
        let text = |key: &'static str, default: &str| -> Result<String, ConfigError> {
            raw(key, default).map(|v| v.trim().to_string())
        };
        let hour = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(v) => v
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber { key, value: v }),
            }
        };

        let defaults = HourBuckets::default();
        let buckets = HourBuckets::new(
            hour("GOLDLINE_OPENING_HOUR", defaults.opening())?,
            hour("GOLDLINE_CLOSING_HOUR", defaults.closing())?,
            hour("GOLDLINE_BUCKET_HOURS", defaults.width())?,
        )?;

        let log_format = match lookup("GOLDLINE_LOG_FORMAT") {
            None => LogFormat::default(),
            Some(v) => v.parse::<LogFormat>()?,
        };

        let login = text("GOLDLINE_LOGIN", DEFAULT_LOGIN)?;
        let password = raw("GOLDLINE_PASSWORD", DEFAULT_PASSWORD)?;
        check_credential_shape(&login, &password).map_err(ConfigError::Credential)?;

        Ok(Self {
            login,
            password,
            display_name: text("GOLDLINE_DISPLAY_NAME", DEFAULT_DISPLAY_NAME)?,
            role: text("GOLDLINE_ROLE", DEFAULT_ROLE)?,
            buckets,
            log_format,
        })
    }

    /// The single account this console admits.
    pub fn credential(&self) -> FixedCredential {
        FixedCredential::new(
            self.login.clone(),
            self.password.clone(),
            Profile::new(
                self.login.clone(),
                self.display_name.clone(),
                Role::new(self.role.clone()),
            ),
        )
    }
}
