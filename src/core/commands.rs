use crate::core::{Clock, Match, MatchStore, Notifier};
use crate::domain::model::{Goal, MatchId, MatchNotification};
use crate::utils::error::{Result, SoccerError};

/// Runs the write side: each call is one load, transition, store cycle.
pub struct MatchCommandService<S: MatchStore, C: Clock, N: Notifier> {
    store: S,
    clock: C,
    notifier: N,
}

impl<S: MatchStore, C: Clock, N: Notifier> MatchCommandService<S, C, N> {
    pub fn new(store: S, clock: C, notifier: N) -> Self {
        Self {
            store,
            clock,
            notifier,
        }
    }

    pub async fn create_match(&self, local_team: &str, away_team: &str) -> Result<MatchId> {
        let game = Match::new(MatchId::new_random(), local_team, away_team)?;
        let id = game.id();

        self.store.put(game).await?;
        tracing::info!("Created match {} ({} vs {})", id, local_team, away_team);

        Ok(id)
    }

    pub async fn set_progress(&self, id: MatchId, in_progress: bool) -> Result<()> {
        let mut game = self.store.get(id).await?;
        let now = self.clock.now();
        tracing::debug!("Setting match {} in_progress={} at {}", id, in_progress, now);

        let notification = if in_progress {
            game.start(now)?
        } else {
            game.end(now)?
        };

        self.store.put(game).await?;
        tracing::info!(
            "Match {} {}",
            id,
            if in_progress { "started" } else { "ended" }
        );

        self.dispatch(&notification).await;
        Ok(())
    }

    pub async fn score_goal(&self, id: MatchId, team_code: &str, scorer: &str) -> Result<()> {
        let mut game = self.store.get(id).await?;
        let side = game
            .side_of(team_code)
            .ok_or_else(|| SoccerError::TeamNotPlaying {
                id,
                code: team_code.to_string(),
            })?;

        let goal = Goal::new(self.clock.now(), scorer);
        game.score_goal(goal, side)?;

        self.store.put(game).await?;
        tracing::info!("Goal for {} in match {} by {}", team_code, id, scorer);

        Ok(())
    }

    /// Delivery is best effort: the transition is already stored.
    async fn dispatch(&self, notification: &MatchNotification) {
        if let Err(e) = self
            .notifier
            .notify(
                &notification.subject,
                &notification.message,
                &notification.recipients,
            )
            .await
        {
            tracing::warn!(
                "Notification '{}' was not delivered: {}",
                notification.subject,
                e
            );
        }
    }
}
