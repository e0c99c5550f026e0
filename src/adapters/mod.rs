// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod notifier;
pub mod store;

pub use clock::{ManualClock, SystemClock};
pub use notifier::{ConfiguredNotifier, LogNotifier, WebhookNotifier};
pub use store::InMemoryMatchStore;
