use crate::domain::model::{Goal, MatchId, MatchNotification, MatchStatus, TeamCode, TeamSide};
use crate::utils::error::{Result, SoccerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single match and its lifecycle.
///
/// Transitions are pure: they mutate the aggregate and hand back the
/// notification to send, leaving delivery to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchRecord")]
pub struct Match {
    id: MatchId,
    local_team: TeamCode,
    away_team: TeamCode,
    started_on: Option<DateTime<Utc>>,
    ended_on: Option<DateTime<Utc>>,
    local_goals: Vec<Goal>,
    away_goals: Vec<Goal>,
}

/// Stored form of a [`Match`]; converted back only if the lifecycle is consistent.
#[derive(Deserialize)]
struct MatchRecord {
    id: MatchId,
    local_team: TeamCode,
    away_team: TeamCode,
    started_on: Option<DateTime<Utc>>,
    ended_on: Option<DateTime<Utc>>,
    local_goals: Vec<Goal>,
    away_goals: Vec<Goal>,
}

impl TryFrom<MatchRecord> for Match {
    type Error = SoccerError;

    fn try_from(record: MatchRecord) -> Result<Self> {
        let invalid = |reason: &str| SoccerError::InvalidMatchRecord {
            id: record.id,
            reason: reason.to_string(),
        };

        match (record.started_on, record.ended_on) {
            (None, Some(_)) => return Err(invalid("ended without being started")),
            (Some(started_on), Some(ended_on)) if ended_on <= started_on => {
                return Err(invalid("ended before it started"))
            }
            (None, None) if !record.local_goals.is_empty() || !record.away_goals.is_empty() => {
                return Err(invalid("has goals but was never started"))
            }
            _ => {}
        }

        Ok(Self {
            id: record.id,
            local_team: record.local_team,
            away_team: record.away_team,
            started_on: record.started_on,
            ended_on: record.ended_on,
            local_goals: record.local_goals,
            away_goals: record.away_goals,
        })
    }
}

impl Match {
    pub fn new(id: MatchId, local_team: &str, away_team: &str) -> Result<Self> {
        let local_team = TeamCode::parse(local_team)?;
        let away_team = TeamCode::parse(away_team)?;

        Ok(Self {
            id,
            local_team,
            away_team,
            started_on: None,
            ended_on: None,
            local_goals: Vec::new(),
            away_goals: Vec::new(),
        })
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn local_team(&self) -> &TeamCode {
        &self.local_team
    }

    pub fn away_team(&self) -> &TeamCode {
        &self.away_team
    }

    pub fn started_on(&self) -> Option<DateTime<Utc>> {
        self.started_on
    }

    pub fn ended_on(&self) -> Option<DateTime<Utc>> {
        self.ended_on
    }

    pub fn local_goals(&self) -> &[Goal] {
        &self.local_goals
    }

    pub fn away_goals(&self) -> &[Goal] {
        &self.away_goals
    }

    pub fn status(&self) -> MatchStatus {
        match (self.started_on, self.ended_on) {
            (Some(_), None) => MatchStatus::InProgress,
            (Some(_), Some(_)) => MatchStatus::Ended,
            (None, _) => MatchStatus::NotStarted,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status() == MatchStatus::InProgress
    }

    pub fn is_ended(&self) -> bool {
        self.status() == MatchStatus::Ended
    }

    /// Which side `team_code` plays on, if it plays in this match at all.
    pub fn side_of(&self, team_code: &str) -> Option<TeamSide> {
        if self.local_team == *team_code {
            Some(TeamSide::Local)
        } else if self.away_team == *team_code {
            Some(TeamSide::Away)
        } else {
            None
        }
    }

    /// Restarting fails on state alone; `now` is not compared to anything.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<MatchNotification> {
        match self.status() {
            MatchStatus::InProgress => return Err(SoccerError::AlreadyInProgress { id: self.id }),
            MatchStatus::Ended => return Err(SoccerError::AlreadyEnded { id: self.id }),
            MatchStatus::NotStarted => {}
        }

        self.started_on = Some(now);
        Ok(self.notification("started", now))
    }

    pub fn end(&mut self, now: DateTime<Utc>) -> Result<MatchNotification> {
        let started_on = match (self.started_on, self.ended_on) {
            (Some(started_on), None) => started_on,
            _ => return Err(SoccerError::NotInProgress { id: self.id }),
        };

        if now <= started_on {
            return Err(SoccerError::InvalidTransition {
                started_on,
                ended_on: now,
            });
        }

        self.ended_on = Some(now);
        Ok(self.notification("ended", now))
    }

    pub fn score_goal(&mut self, goal: Goal, side: TeamSide) -> Result<()> {
        if !self.is_in_progress() {
            return Err(SoccerError::NotInProgress { id: self.id });
        }

        match side {
            TeamSide::Local => self.local_goals.push(goal),
            TeamSide::Away => self.away_goals.push(goal),
        }
        Ok(())
    }

    fn notification(&self, event: &str, on: DateTime<Utc>) -> MatchNotification {
        MatchNotification {
            subject: format!("Match {} {}", self.id, event),
            message: format!(
                "The match between {} and {} has {} on {}",
                self.local_team, self.away_team, event, on
            ),
            recipients: vec![
                self.local_team.to_string(),
                self.away_team.to_string(),
            ],
        }
    }
}
