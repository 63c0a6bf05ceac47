//! Errors from parsing bracket markup in dialog text.

use std::{error::Error, fmt};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing markup in a piece of dialog.
pub struct MarkupError {
    /// Dialog text that caused the error.
    pub content: String,
    /// Kind of error.
    pub kind: MarkupErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of markup errors.
pub enum MarkupErrorKind {
    /// One or more markup tags were still open at the end of the text.
    Unterminated {
        /// Names of the open markup, from outermost to innermost.
        names: Vec<String>,
    },
    /// Found a `[/name]` closer while no markup with that name was open.
    UnmatchedCloser { name: String },
}

impl MarkupError {
    pub(crate) fn from_kind<T: Into<String>>(content: T, kind: MarkupErrorKind) -> Self {
        MarkupError {
            content: content.into(),
            kind,
        }
    }
}

impl Error for MarkupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error for MarkupErrorKind {}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} in dialog '{}'", self.kind, self.content)
    }
}

impl fmt::Display for MarkupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use MarkupErrorKind::*;

        match self {
            Unterminated { names } => write!(
                f,
                "markup [{}] was never closed (close it with '[/name]' or '[/]')",
                names.join("], [")
            ),
            UnmatchedCloser { name } => {
                write!(f, "found closing markup '[/{}]' with no open '[{}]'", name, name)
            }
        }
    }
}
