//! Main error type from parsing a script.

use std::{
    error::Error,
    fmt::{self, Write},
};

use crate::{
    error::{
        parse::node::{NodeError, NodeErrorKind},
        utils::write_line_information,
    },
    utils::MetaData,
};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing text to construct a script.
pub enum ParseError {
    /// Attempted to construct a script from a string with no nodes.
    Empty,
    /// The input was larger than the configured limit.
    InputTooLarge {
        /// Size of the input in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max: usize,
    },
    /// Two nodes in the script have the same title.
    DuplicateNodeId {
        /// The duplicated title.
        id: String,
        /// Information about the origin of the second node with this title.
        meta_data: MetaData,
        /// Information about the origin of the first node with this title.
        prev_meta_data: MetaData,
    },
    /// Could not parse a node in the script.
    NodeError(NodeError),
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            ParseError::NodeError(err) => Some(err),
            _ => None,
        }
    }
}

impl_from_error![
    ParseError;
    [NodeError, NodeError]
];

/// Get a string with a report of an error from parsing a script.
///
/// Errors from lines are reported along with the node they are in and the
/// content of the line.
pub fn print_parse_error(error: &ParseError) -> Result<String, fmt::Error> {
    let mut buffer = String::new();

    match error {
        ParseError::NodeError(err) => {
            writeln!(
                &mut buffer,
                "Could not parse the node starting at {}:",
                err.node_meta_data
            )?;
            writeln!(&mut buffer, "    {}", err)?;

            if let NodeErrorKind::LineError(line_error) = &err.kind {
                writeln!(&mut buffer, "    |")?;
                writeln!(&mut buffer, "    | {}", line_error.line)?;
            }
        }
        _ => writeln!(&mut buffer, "{}", error)?,
    }

    Ok(buffer)
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseError::*;

        match self {
            Empty => write!(f, "Could not parse script: no nodes were found"),
            InputTooLarge { size, max } => write!(
                f,
                "Could not parse script: input of {} bytes exceeds the limit of {} bytes",
                size, max
            ),
            DuplicateNodeId {
                id,
                meta_data,
                prev_meta_data,
            } => {
                write_line_information(f, meta_data)?;
                write!(
                    f,
                    "encountered another node with title '{}' in the script (previous at {})",
                    id, prev_meta_data
                )
            }
            NodeError(err) => write!(f, "{}", err),
        }
    }
}
