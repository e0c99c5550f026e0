use crate::domain::model::MatchId;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoccerError {
    #[error("Invalid team code {code}")]
    InvalidTeamCode { code: String },

    #[error("Match {id} already in progress")]
    AlreadyInProgress { id: MatchId },

    #[error("Match {id} already ended")]
    AlreadyEnded { id: MatchId },

    #[error("Match {id} is not in progress")]
    NotInProgress { id: MatchId },

    #[error("The match started on {started_on} and cannot end on {ended_on}")]
    InvalidTransition {
        started_on: DateTime<Utc>,
        ended_on: DateTime<Utc>,
    },

    #[error("The team code {code} is not playing match {id}")]
    TeamNotPlaying { id: MatchId, code: String },

    #[error("Match {id} not found")]
    NotFound { id: MatchId },

    #[error("Match {id} has not started")]
    MatchNotStarted { id: MatchId },

    #[error("Stored match {id} is inconsistent: {reason}")]
    InvalidMatchRecord { id: MatchId, reason: String },

    #[error("No match has been created yet, so 'last' refers to nothing")]
    NoMatchCreated,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Notification request failed: {0}")]
    NotificationError(#[from] reqwest::Error),

    #[error("Notification endpoint rejected the request with status {status}")]
    NotificationRejected { status: u16 },

    #[error("Cannot parse command '{line}': {reason}")]
    CommandParseError { line: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Rejected input: bad team codes, unknown teams, impossible end times.
    Validation,
    /// The match is in the wrong state for the requested transition.
    Conflict,
    NotFound,
    Configuration,
    Infrastructure,
}

impl SoccerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SoccerError::InvalidTeamCode { .. }
            | SoccerError::InvalidTransition { .. }
            | SoccerError::TeamNotPlaying { .. }
            | SoccerError::CommandParseError { .. }
            | SoccerError::NoMatchCreated => ErrorCategory::Validation,
            SoccerError::AlreadyInProgress { .. }
            | SoccerError::AlreadyEnded { .. }
            | SoccerError::NotInProgress { .. }
            | SoccerError::MatchNotStarted { .. } => ErrorCategory::Conflict,
            SoccerError::NotFound { .. } => ErrorCategory::NotFound,
            SoccerError::ConfigError { .. }
            | SoccerError::ConfigValidationError { .. }
            | SoccerError::InvalidConfigValueError { .. }
            | SoccerError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SoccerError::IoError(_)
            | SoccerError::SerializationError(_)
            | SoccerError::InvalidMatchRecord { .. }
            | SoccerError::NotificationError(_)
            | SoccerError::NotificationRejected { .. } => ErrorCategory::Infrastructure,
        }
    }

    /// True for match rule violations, which callers surface unchanged.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            SoccerError::InvalidTeamCode { .. }
                | SoccerError::AlreadyInProgress { .. }
                | SoccerError::AlreadyEnded { .. }
                | SoccerError::NotInProgress { .. }
                | SoccerError::InvalidTransition { .. }
                | SoccerError::TeamNotPlaying { .. }
                | SoccerError::NotFound { .. }
                | SoccerError::MatchNotStarted { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Request rejected: {}", self),
            ErrorCategory::Conflict => format!("Not allowed right now: {}", self),
            ErrorCategory::NotFound => format!("Unknown match: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Infrastructure => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SoccerError::InvalidTeamCode { .. } => {
                "Team codes are exactly 3 characters with no lowercase letters, e.g. RMA"
            }
            SoccerError::TeamNotPlaying { .. } => {
                "Use the local or away team code of this match"
            }
            SoccerError::AlreadyInProgress { .. } | SoccerError::AlreadyEnded { .. } => {
                "A match can only be started once"
            }
            SoccerError::NotInProgress { .. } => "Start the match first; ended matches are final",
            SoccerError::InvalidTransition { .. } => "Check the clock source; end must be after start",
            SoccerError::NotFound { .. } => "Check the match id returned by 'create'",
            SoccerError::MatchNotStarted { .. } => "Start the match before requesting its scoreboard",
            SoccerError::CommandParseError { .. } => {
                "Commands: create, start, end, goal, board"
            }
            SoccerError::NoMatchCreated => "Run 'create <LOCAL> <AWAY>' before using 'last'",
            SoccerError::InvalidMatchRecord { .. } => "The stored match data is corrupt",
            SoccerError::ConfigError { .. }
            | SoccerError::ConfigValidationError { .. }
            | SoccerError::InvalidConfigValueError { .. }
            | SoccerError::MissingConfigError { .. } => "Fix the configuration file and retry",
            SoccerError::IoError(_) => "Check that the file exists and is readable",
            SoccerError::SerializationError(_) => "Check the data format",
            SoccerError::NotificationError(_) | SoccerError::NotificationRejected { .. } => {
                "Check the notifier endpoint"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SoccerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_categorised() {
        let id = MatchId::nil();
        assert_eq!(
            SoccerError::NotFound { id }.category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            SoccerError::AlreadyEnded { id }.category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            SoccerError::InvalidTeamCode {
                code: "rm".to_string()
            }
            .category(),
            ErrorCategory::Validation
        );
        assert!(SoccerError::MatchNotStarted { id }.is_domain_error());
        assert!(!SoccerError::NotificationRejected { status: 500 }.is_domain_error());
    }

    #[test]
    fn test_console_and_storage_errors_are_not_domain_errors() {
        assert_eq!(SoccerError::NoMatchCreated.category(), ErrorCategory::Validation);
        assert!(!SoccerError::NoMatchCreated.is_domain_error());

        let corrupt = SoccerError::InvalidMatchRecord {
            id: MatchId::nil(),
            reason: "ended without being started".to_string(),
        };
        assert_eq!(corrupt.category(), ErrorCategory::Infrastructure);
        assert!(!corrupt.is_domain_error());
        assert!(corrupt.user_friendly_message().starts_with("System error"));
    }

    #[test]
    fn test_messages_name_the_match() {
        let id = MatchId::nil();
        let err = SoccerError::AlreadyInProgress { id };
        assert_eq!(
            err.to_string(),
            "Match 00000000-0000-0000-0000-000000000000 already in progress"
        );
        assert!(err.user_friendly_message().starts_with("Not allowed right now"));
    }
}
