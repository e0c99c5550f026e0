pub mod console;

pub use console::{Console, ConsoleCommand, MatchRef};
