//! Errors from parsing individual lines in scripts.

use std::{error::Error, fmt};

use crate::{
    error::{
        parse::{CommandError, MarkupError, VariableError},
        utils::write_line_information,
    },
    utils::MetaData,
};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing individual lines in a script.
pub struct LineError {
    /// Line that caused the error.
    pub line: String,
    /// Kind of error.
    pub kind: LineErrorKind,
    /// Information about the origin of the line that caused this error.
    pub meta_data: MetaData,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of line errors.
pub enum LineErrorKind {
    /// A `<<command>>` segment could not be read.
    MalformedCommand(CommandError),
    /// A `{$variable}` segment could not be read.
    MalformedVariable(VariableError),
    /// Markup in a dialog segment was not well formed.
    Markup(MarkupError),
    /// Another line in the same script already has this id.
    DuplicateId { id: String },
}

impl LineError {
    pub(crate) fn from_kind<T: Into<String>, K: Into<LineErrorKind>>(
        line: T,
        kind: K,
        meta_data: &MetaData,
    ) -> Self {
        LineError {
            line: line.into(),
            kind: kind.into(),
            meta_data: meta_data.clone(),
        }
    }
}

impl Error for LineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error for LineErrorKind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            LineErrorKind::MalformedCommand(err) => Some(err),
            LineErrorKind::MalformedVariable(err) => Some(err),
            LineErrorKind::Markup(err) => Some(err),
            LineErrorKind::DuplicateId { .. } => None,
        }
    }
}

impl_from_error![
    LineErrorKind;
    [MalformedCommand, CommandError],
    [MalformedVariable, VariableError],
    [Markup, MarkupError]
];

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_line_information(f, &self.meta_data)?;
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use LineErrorKind::*;

        match &self {
            MalformedCommand(err) => write!(f, "could not parse a command: {}", err),
            MalformedVariable(err) => write!(f, "could not parse a variable: {}", err),
            Markup(err) => write!(f, "could not parse markup: {}", err),
            DuplicateId { id } => write!(f, "encountered another line with id '{}'", id),
        }
    }
}
