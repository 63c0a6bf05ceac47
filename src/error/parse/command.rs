//! Errors from parsing commands.

use std::{error::Error, fmt};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing a `<<command>>`.
pub struct CommandError {
    /// Content that caused the error.
    pub content: String,
    /// Kind of error.
    pub kind: CommandErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of command errors.
pub enum CommandErrorKind {
    /// The content is not enclosed in `<<` and `>>`.
    MissingDelimiters,
    /// No command name was found between the delimiters.
    EmptyName,
    /// The command name contains characters other than letters, digits and underscores.
    InvalidName { name: String },
}

impl CommandError {
    pub(crate) fn from_kind<T: Into<String>>(content: T, kind: CommandErrorKind) -> Self {
        CommandError {
            content: content.into(),
            kind,
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error for CommandErrorKind {}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed command '{}': {}", self.content, self.kind)
    }
}

impl fmt::Display for CommandErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use CommandErrorKind::*;

        match self {
            MissingDelimiters => write!(f, "expected the command to be enclosed in '<<' and '>>'"),
            EmptyName => write!(f, "no command name between the delimiters"),
            InvalidName { name } => write!(
                f,
                "command name '{}' contains invalid characters: only alphanumeric \
                 and underline characters are allowed",
                name
            ),
        }
    }
}
