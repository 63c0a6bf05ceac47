//! Utilities and derives used elsewhere in the library.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Information about the origin of an item.
///
/// Used to present errors and log messages along with where in the parsed
/// document they originated from.
pub struct MetaData {
    /// Which line in the original document the item originated from (starting at 0).
    pub line_index: u32,
}

impl MetaData {
    /// Line number of the item, counted from 1 like in a text editor.
    pub fn line(&self) -> u32 {
        self.line_index + 1
    }

    /// Return meta data which is offset by a number of lines.
    pub(crate) fn offset(&self, lines: usize) -> Self {
        MetaData {
            line_index: self.line_index + lines as u32,
        }
    }
}

impl fmt::Display for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}", self.line())
    }
}

impl From<usize> for MetaData {
    fn from(line_index: usize) -> Self {
        MetaData {
            line_index: line_index as u32,
        }
    }
}

#[cfg(test)]
impl From<()> for MetaData {
    fn from(_: ()) -> Self {
        MetaData { line_index: 0 }
    }
}

/// Split a string into lines along with their position in the string.
///
/// The lines are not trimmed and empty lines are kept, so that the attached
/// `MetaData` always points at the true line of the input.
pub(crate) fn enumerate_lines<'a>(
    content: &'a str,
    start: &MetaData,
) -> Vec<(&'a str, MetaData)> {
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| (line, start.offset(i)))
        .collect()
}
