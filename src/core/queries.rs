use crate::core::MatchStore;
use crate::domain::model::MatchId;
use crate::domain::scoreboard::{self, ScoreBoard};
use crate::utils::error::Result;

pub struct MatchQueryService<S: MatchStore> {
    store: S,
}

impl<S: MatchStore> MatchQueryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn get_scoreboard(&self, id: MatchId) -> Result<ScoreBoard> {
        let game = self.store.get(id).await?;
        scoreboard::project(&game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryMatchStore;
    use crate::core::Match;
    use crate::domain::model::{Goal, TeamSide};
    use crate::utils::error::SoccerError;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_scoreboard() {
        let store = Arc::new(InMemoryMatchStore::new());
        let kick_off = Utc.with_ymd_and_hms(2022, 3, 1, 18, 0, 0).unwrap();
        let id = MatchId::new_random();
        let mut game = Match::new(id, "RMA", "BAR").unwrap();
        game.start(kick_off).unwrap();
        game.score_goal(Goal::new(kick_off + Duration::minutes(10), "Esther"), TeamSide::Local)
            .unwrap();
        game.score_goal(Goal::new(kick_off + Duration::minutes(25), "Esther"), TeamSide::Local)
            .unwrap();
        game.score_goal(Goal::new(kick_off + Duration::minutes(90), "Rolfö"), TeamSide::Away)
            .unwrap();
        store.put(game.clone()).await.unwrap();

        let service = MatchQueryService::new(store.clone());
        let board = service.get_scoreboard(id).await.unwrap();

        assert_eq!(board.result, "RMA 2 - 1 BAR");
        assert_eq!(board.local_team_goals_details, vec!["10' Esther", "25' Esther"]);
        assert_eq!(board.away_team_goals_details, vec!["90' Rolfö"]);
        assert_eq!(store.get(id).await.unwrap(), game);
    }

    #[tokio::test]
    async fn test_get_scoreboard_unknown_match() {
        let service = MatchQueryService::new(InMemoryMatchStore::new());
        let err = service.get_scoreboard(MatchId::nil()).await.unwrap_err();
        assert!(matches!(err, SoccerError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_scoreboard_before_start() {
        let store = InMemoryMatchStore::new();
        let id = MatchId::new_random();
        store.put(Match::new(id, "RMA", "BAR").unwrap()).await.unwrap();

        let service = MatchQueryService::new(store);
        let err = service.get_scoreboard(id).await.unwrap_err();
        assert!(matches!(err, SoccerError::MatchNotStarted { .. }));
    }
}
