use crate::utils::error::{Result, SoccerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const TEAM_CODE_LENGTH: usize = 3;

/// A team code is exactly three characters, none of them lowercase.
/// Digits and symbols are accepted.
pub fn is_valid_team_code(code: &str) -> bool {
    code.chars().count() == TEAM_CODE_LENGTH && !code.chars().any(char::is_lowercase)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamCode(String);

impl TeamCode {
    pub fn parse(code: &str) -> Result<Self> {
        if !is_valid_team_code(code) {
            return Err(SoccerError::InvalidTeamCode {
                code: code.to_string(),
            });
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamCode {
    type Error = SoccerError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TeamCode> for String {
    fn from(code: TeamCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for TeamCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl From<Uuid> for MatchId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for MatchId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    scored_on: DateTime<Utc>,
    scored_by: String,
}

impl Goal {
    pub fn new(scored_on: DateTime<Utc>, scored_by: impl Into<String>) -> Self {
        Self {
            scored_on,
            scored_by: scored_by.into(),
        }
    }

    pub fn scored_on(&self) -> DateTime<Utc> {
        self.scored_on
    }

    pub fn scored_by(&self) -> &str {
        &self.scored_by
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Local,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Ended,
}

/// What a lifecycle transition asks the caller to announce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchNotification {
    pub subject: String,
    pub message: String,
    pub recipients: Vec<String>,
}
