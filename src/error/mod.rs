//! Errors from parsing scripts.

#[macro_use]
pub(crate) mod utils;
pub mod parse;

pub use parse::{
    print_parse_error, CommandError, CommandErrorKind, LineError, LineErrorKind, MarkupError,
    MarkupErrorKind, NodeError, NodeErrorKind, ParseError, VariableError, VariableErrorKind,
};
