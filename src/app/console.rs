use crate::core::commands::MatchCommandService;
use crate::core::queries::MatchQueryService;
use crate::core::{Clock, MatchStore, Notifier};
use crate::domain::model::MatchId;
use crate::domain::scoreboard::ScoreBoard;
use crate::utils::error::{Result, SoccerError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRef {
    Id(MatchId),
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Create { local: String, away: String },
    Start(MatchRef),
    End(MatchRef),
    Goal {
        target: MatchRef,
        team: String,
        scorer: String,
    },
    Board(MatchRef),
}

fn parse_error(line: &str, reason: impl Into<String>) -> SoccerError {
    SoccerError::CommandParseError {
        line: line.to_string(),
        reason: reason.into(),
    }
}

fn parse_ref(line: &str, token: Option<&str>) -> Result<MatchRef> {
    match token {
        None => Err(parse_error(line, "missing match id")),
        Some("last") => Ok(MatchRef::Last),
        Some(raw) => raw
            .parse()
            .map(MatchRef::Id)
            .map_err(|e| parse_error(line, format!("invalid match id: {}", e))),
    }
}

impl FromStr for ConsoleCommand {
    type Err = SoccerError;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or_else(|| parse_error(line, "empty command"))?;

        let command = match verb {
            "create" => match (tokens.next(), tokens.next()) {
                (Some(local), Some(away)) => ConsoleCommand::Create {
                    local: local.to_string(),
                    away: away.to_string(),
                },
                _ => return Err(parse_error(line, "usage: create <LOCAL> <AWAY>")),
            },
            "start" => ConsoleCommand::Start(parse_ref(line, tokens.next())?),
            "end" => ConsoleCommand::End(parse_ref(line, tokens.next())?),
            "board" => ConsoleCommand::Board(parse_ref(line, tokens.next())?),
            "goal" => {
                let target = parse_ref(line, tokens.next())?;
                let team = tokens
                    .next()
                    .ok_or_else(|| parse_error(line, "usage: goal <id|last> <TEAM> <scorer>"))?
                    .to_string();
                let scorer = tokens.by_ref().collect::<Vec<_>>().join(" ");
                if scorer.is_empty() {
                    return Err(parse_error(line, "missing scorer name"));
                }
                ConsoleCommand::Goal {
                    target,
                    team,
                    scorer,
                }
            }
            other => return Err(parse_error(line, format!("unknown command '{}'", other))),
        };

        if matches!(command, ConsoleCommand::Goal { .. }) {
            return Ok(command);
        }
        match tokens.next() {
            Some(extra) => Err(parse_error(line, format!("unexpected argument '{}'", extra))),
            None => Ok(command),
        }
    }
}

/// Line-oriented front end over the command and query services.
pub struct Console<S: MatchStore, C: Clock, N: Notifier> {
    commands: MatchCommandService<S, C, N>,
    queries: MatchQueryService<S>,
    last_created: Option<MatchId>,
    json: bool,
}

impl<S: MatchStore + Clone, C: Clock, N: Notifier> Console<S, C, N> {
    pub fn new(store: S, clock: C, notifier: N) -> Self {
        Self {
            commands: MatchCommandService::new(store.clone(), clock, notifier),
            queries: MatchQueryService::new(store),
            last_created: None,
            json: false,
        }
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Runs one script line. Blank lines and `#` comments produce no output.
    pub async fn execute_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let command: ConsoleCommand = trimmed.parse()?;
        self.execute(command).await.map(Some)
    }

    pub async fn execute(&mut self, command: ConsoleCommand) -> Result<String> {
        match command {
            ConsoleCommand::Create { local, away } => {
                let id = self.commands.create_match(&local, &away).await?;
                self.last_created = Some(id);
                Ok(id.to_string())
            }
            ConsoleCommand::Start(target) => {
                let id = self.resolve(target)?;
                self.commands.set_progress(id, true).await?;
                Ok(format!("Match {} started", id))
            }
            ConsoleCommand::End(target) => {
                let id = self.resolve(target)?;
                self.commands.set_progress(id, false).await?;
                Ok(format!("Match {} ended", id))
            }
            ConsoleCommand::Goal {
                target,
                team,
                scorer,
            } => {
                let id = self.resolve(target)?;
                self.commands.score_goal(id, &team, &scorer).await?;
                Ok(format!("Goal for {} by {}", team, scorer))
            }
            ConsoleCommand::Board(target) => {
                let id = self.resolve(target)?;
                let board = self.queries.get_scoreboard(id).await?;
                self.render(&board)
            }
        }
    }

    fn resolve(&self, target: MatchRef) -> Result<MatchId> {
        match target {
            MatchRef::Id(id) => Ok(id),
            MatchRef::Last => self.last_created.ok_or(SoccerError::NoMatchCreated),
        }
    }

    fn render(&self, board: &ScoreBoard) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(board)?);
        }

        let mut lines = vec![board.result.clone()];
        for detail in &board.local_team_goals_details {
            lines.push(format!("  {} {}", board.local_team, detail));
        }
        for detail in &board.away_team_goals_details {
            lines.push(format!("  {} {}", board.away_team, detail));
        }
        Ok(lines.join("\n"))
    }
}
