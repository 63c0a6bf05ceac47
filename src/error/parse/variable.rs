//! Errors from parsing variables in lines.

use std::{error::Error, fmt};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing a `{$variable}`.
pub struct VariableError {
    /// Content that caused the error.
    pub content: String,
    /// Kind of error.
    pub kind: VariableErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of variable errors.
pub enum VariableErrorKind {
    /// The content is not enclosed in `{$` and `}`.
    MissingDelimiters,
    /// No variable name was found between the delimiters.
    EmptyName,
    /// The variable name contains characters other than letters, digits and underscores.
    InvalidName { name: String },
}

impl VariableError {
    pub(crate) fn from_kind<T: Into<String>>(content: T, kind: VariableErrorKind) -> Self {
        VariableError {
            content: content.into(),
            kind,
        }
    }
}

impl Error for VariableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error for VariableErrorKind {}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} in variable string '{}'", self.kind, self.content)
    }
}

impl fmt::Display for VariableErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use VariableErrorKind::*;

        match &self {
            MissingDelimiters => write!(f, "missing '{{$' or '}}' delimiters"),
            EmptyName => write!(f, "empty variable name"),
            InvalidName { name } => write!(f, "invalid variable name '{}'", name),
        }
    }
}
