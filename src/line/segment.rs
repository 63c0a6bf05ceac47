//! Pieces that the content of a line is made of.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::line::{Command, Dialog, Variable};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Part of the content of a line, in the order that it appears.
pub enum Segment {
    Dialog(Dialog),
    Command(Command),
    Variable(Variable),
}

impl Segment {
    pub fn as_dialog(&self) -> Option<&Dialog> {
        match self {
            Segment::Dialog(dialog) => Some(dialog),
            _ => None,
        }
    }

    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Segment::Command(command) => Some(command),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Segment::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// Segment as it was written in the line.
    pub fn original(&self) -> &str {
        match self {
            Segment::Dialog(dialog) => &dialog.original,
            Segment::Command(command) => &command.original,
            Segment::Variable(variable) => &variable.original,
        }
    }
}

impl From<Dialog> for Segment {
    fn from(dialog: Dialog) -> Self {
        Segment::Dialog(dialog)
    }
}

impl From<Command> for Segment {
    fn from(command: Command) -> Self {
        Segment::Command(command)
    }
}

impl From<Variable> for Segment {
    fn from(variable: Variable) -> Self {
        Segment::Variable(variable)
    }
}
