use crate::domain::aggregate::Match;
use crate::domain::model::Goal;
use crate::utils::error::{Result, SoccerError};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalDescription {
    pub minute: i64,
    pub player: String,
}

impl GoalDescription {
    pub fn details(&self) -> String {
        format!("{}' {}", self.minute, self.player)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBoard {
    pub local_team: String,
    pub local_team_score: usize,
    pub away_team: String,
    pub away_team_score: usize,
    pub result: String,
    pub local_team_goals_details: Vec<String>,
    pub away_team_goals_details: Vec<String>,
}

impl ScoreBoard {
    fn new(
        local_team: String,
        local_goals: Vec<GoalDescription>,
        away_team: String,
        away_goals: Vec<GoalDescription>,
    ) -> Self {
        let result = format!(
            "{} {} - {} {}",
            local_team,
            local_goals.len(),
            away_goals.len(),
            away_team
        );

        Self {
            local_team_score: local_goals.len(),
            away_team_score: away_goals.len(),
            local_team_goals_details: local_goals.iter().map(GoalDescription::details).collect(),
            away_team_goals_details: away_goals.iter().map(GoalDescription::details).collect(),
            local_team,
            away_team,
            result,
        }
    }
}

/// Derive the scoreboard of a started match.
pub fn project(game: &Match) -> Result<ScoreBoard> {
    let started_on = game
        .started_on()
        .ok_or(SoccerError::MatchNotStarted { id: game.id() })?;

    Ok(ScoreBoard::new(
        game.local_team().to_string(),
        describe_goals(game.local_goals(), started_on),
        game.away_team().to_string(),
        describe_goals(game.away_goals(), started_on),
    ))
}

fn describe_goals(goals: &[Goal], started_on: DateTime<Utc>) -> Vec<GoalDescription> {
    goals
        .iter()
        .map(|goal| GoalDescription {
            // num_minutes truncates toward zero
            minute: (goal.scored_on() - started_on).num_minutes(),
            player: goal.scored_by().to_string(),
        })
        .collect()
}
