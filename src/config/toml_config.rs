use crate::utils::error::{Result, SoccerError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const NOTIFIER_KINDS: [&str; 2] = ["log", "webhook"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoccerConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "soccer-live".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    #[serde(default = "default_notifier_kind")]
    pub kind: String,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub sender: Option<String>,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            kind: default_notifier_kind(),
            endpoint: None,
            timeout_seconds: None,
            sender: None,
        }
    }
}

fn default_notifier_kind() -> String {
    "log".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

fn default_log_format() -> String {
    "compact".to_string()
}

impl SoccerConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SoccerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SoccerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn notifier_timeout_seconds(&self) -> u64 {
        self.notifier.timeout_seconds.unwrap_or(5)
    }

    pub fn notifier_sender(&self) -> &str {
        self.notifier
            .sender
            .as_deref()
            .unwrap_or("noreply@soccer-live.local")
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for SoccerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_one_of("notifier.kind", &self.notifier.kind, &NOTIFIER_KINDS)?;
        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        if self.notifier.kind == "webhook" {
            let endpoint =
                validation::validate_required_field("notifier.endpoint", &self.notifier.endpoint)?;
            validation::validate_url("notifier.endpoint", endpoint)?;
        }

        if let Some(timeout) = self.notifier.timeout_seconds {
            validation::validate_range("notifier.timeout_seconds", timeout, 1, 60)?;
        }

        if let Some(sender) = &self.notifier.sender {
            validation::validate_non_empty_string("notifier.sender", sender)?;
        }

        Ok(())
    }
}
