pub mod commands;
pub mod queries;

pub use crate::domain::aggregate::Match;
pub use crate::domain::ports::{Clock, MatchStore, Notifier};
pub use crate::utils::error::Result;
