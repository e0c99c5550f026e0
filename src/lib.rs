pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    ConfiguredNotifier, InMemoryMatchStore, LogNotifier, ManualClock, SystemClock, WebhookNotifier,
};
pub use app::Console;
pub use config::SoccerConfig;
pub use crate::core::{commands::MatchCommandService, queries::MatchQueryService};
pub use domain::aggregate::Match;
pub use domain::scoreboard::ScoreBoard;
pub use utils::error::{Result, SoccerError};
