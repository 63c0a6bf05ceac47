//! Inline `{$variable}` segments.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::{error::VariableError, line::parse::parse_variable};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Variable to be interpolated into a line by the runner of a script.
pub struct Variable {
    /// Name of the variable, without the `$` sigil.
    pub name: String,
    pub original: String,
}

impl Variable {
    /// Parse a variable from a string like `{$name}`.
    pub fn parse(content: &str) -> Result<Self, VariableError> {
        parse_variable(content)
    }
}
