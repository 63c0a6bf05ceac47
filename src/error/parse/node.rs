//! Errors from parsing nodes.

use std::{error::Error, fmt};

use crate::{
    consts::TITLE_KEY,
    error::{parse::line::LineError, utils::write_line_information},
    utils::MetaData,
};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing a single node.
pub struct NodeError {
    /// Information about the line at which the node starts.
    pub node_meta_data: MetaData,
    /// Kind of error.
    pub kind: NodeErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of node errors.
pub enum NodeErrorKind {
    /// The node header has no `title` field.
    MissingTitle,
    /// The node has no content lines.
    EmptyNode {
        /// Id of the node.
        node: String,
    },
    /// A header line is not on the form `key: value`.
    MalformedMetadata {
        /// Header line that could not be read.
        line: String,
        /// Information about the origin of the header line.
        meta_data: MetaData,
    },
    /// Could not parse a line in the node.
    LineError(LineError),
}

impl NodeError {
    pub(crate) fn from_kind<K: Into<NodeErrorKind>>(kind: K, node_meta_data: &MetaData) -> Self {
        NodeError {
            node_meta_data: node_meta_data.clone(),
            kind: kind.into(),
        }
    }
}

impl Error for NodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error for NodeErrorKind {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            NodeErrorKind::LineError(err) => Some(err),
            _ => None,
        }
    }
}

impl_from_error![
    NodeErrorKind;
    [LineError, LineError]
];

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use NodeErrorKind::*;

        match &self.kind {
            // These variants carry their own `MetaData` to use
            MalformedMetadata { .. } | LineError(..) => (),
            _ => write_line_information(f, &self.node_meta_data)?,
        }

        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for NodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use NodeErrorKind::*;

        match self {
            MissingTitle => write!(f, "node header has no '{}' field", TITLE_KEY),
            EmptyNode { node } => write!(f, "node '{}' has no content", node),
            MalformedMetadata { line, meta_data } => {
                write_line_information(f, meta_data)?;
                write!(
                    f,
                    "expected a node header line on the form 'key: value' but found '{}'",
                    line
                )
            }
            LineError(err) => write!(f, "{}", err),
        }
    }
}
