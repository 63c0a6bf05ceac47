use crate::utils::MetaData;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Log message with additional information.
pub struct LogMessage {
    /// Logged message.
    pub message: MessageKind,
    /// Information of where the message originated from.
    pub meta_data: MetaData,
}

impl LogMessage {
    pub(crate) fn with_kind(message: MessageKind, meta_data: &MetaData) -> Self {
        LogMessage {
            message,
            meta_data: meta_data.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Type of log message with content.
pub enum MessageKind {
    /// Non-fatal error or incompatibility.
    Warning(Warning),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A detected non-fatal problem.
pub enum Warning {
    /// A `<<jump>>` command names a node that is not in the script.
    UnknownJumpTarget {
        /// Name of the missing node.
        target: String,
        /// Node in which the command was found.
        node: String,
    },
    /// A `<<jump>>` command has no target.
    JumpWithoutTarget {
        /// Node in which the command was found.
        node: String,
    },
    /// A quoted command parameter was never closed and ran to the end of the command.
    UnterminatedQuote {
        /// The command as written in the script.
        command: String,
    },
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match &self.message {
            MessageKind::Warning(_) => "WARNING",
        };

        write!(f, "[{}] {}: {}", self.meta_data, kind, self.message)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use MessageKind::*;

        match self {
            Warning(warning) => write!(f, "{}", warning),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Warning::*;

        match self {
            UnknownJumpTarget { target, node } => write!(
                f,
                "jump in node '{}' targets '{}' but no node with that title exists",
                node, target
            ),
            JumpWithoutTarget { node } => {
                write!(f, "jump in node '{}' has no target node", node)
            }
            UnterminatedQuote { command } => write!(
                f,
                "quoted parameter in '{}' is never closed: it runs to the end of the command",
                command
            ),
        }
    }
}
