//! Shared types for the pelt bridge: error taxonomy and the normalized
//! event data model used by both network clients.

pub mod errors;
pub mod events;

pub use errors::{ConfigError, ControlError, LiveError, PeltError};
pub use events::{EventKind, EventSettings, NormalizedEvent};
