use crate::domain::aggregate::Match;
use crate::domain::model::MatchId;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, subject: &str, message: &str, recipients: &[String]) -> Result<()>;
}

/// Keyed match persistence. `put` replaces any entry with the same id.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn get(&self, id: MatchId) -> Result<Match>;
    async fn put(&self, game: Match) -> Result<()>;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[async_trait]
impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    async fn notify(&self, subject: &str, message: &str, recipients: &[String]) -> Result<()> {
        (**self).notify(subject, message, recipients).await
    }
}

#[async_trait]
impl<S: MatchStore + ?Sized> MatchStore for Arc<S> {
    async fn get(&self, id: MatchId) -> Result<Match> {
        (**self).get(id).await
    }

    async fn put(&self, game: Match) -> Result<()> {
        (**self).put(game).await
    }
}
