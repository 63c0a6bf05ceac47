//! Utilities for inspecting warnings and other non-fatal problems found in a script.

mod logger;
mod message;

pub use logger::{Logger, LoggerIter};
pub use message::{LogMessage, MessageKind, Warning};
