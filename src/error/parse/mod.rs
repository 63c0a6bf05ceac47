//! Errors from parsing scripts, nodes, lines and their segments.
//!
//! Parsing fails fast: the first error that is encountered aborts the parse and
//! is returned wrapped in the error types of every enclosing level. A `ParseError`
//! from a script can thus be walked down through `source()` to the segment of
//! the line which caused it.

pub mod command;
pub mod line;
pub mod markup;
pub mod node;
pub mod parse;
pub mod variable;

pub use command::{CommandError, CommandErrorKind};
pub use line::{LineError, LineErrorKind};
pub use markup::{MarkupError, MarkupErrorKind};
pub use node::{NodeError, NodeErrorKind};
pub use parse::{print_parse_error, ParseError};
pub use variable::{VariableError, VariableErrorKind};
