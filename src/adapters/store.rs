use crate::domain::aggregate::Match;
use crate::domain::model::MatchId;
use crate::domain::ports::MatchStore;
use crate::utils::error::{Result, SoccerError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store. Readers get a copy; the last `put` for an id wins.
#[derive(Debug, Default)]
pub struct InMemoryMatchStore {
    matches: RwLock<HashMap<MatchId, Match>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.matches.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.matches.read().await.is_empty()
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn get(&self, id: MatchId) -> Result<Match> {
        tracing::debug!("Loading match {}", id);
        self.matches
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SoccerError::NotFound { id })
    }

    async fn put(&self, game: Match) -> Result<()> {
        tracing::debug!("Storing match {}", game.id());
        self.matches.write().await.insert(game.id(), game);
        Ok(())
    }
}
