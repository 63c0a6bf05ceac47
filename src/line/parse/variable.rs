//! Parse `{$variable}` segments.

use crate::{
    consts::{VARIABLE_CLOSE, VARIABLE_OPEN},
    error::{VariableError, VariableErrorKind},
    line::{parse::is_word, Variable},
};

/// Parse a `Variable` from a string.
pub fn parse_variable(content: &str) -> Result<Variable, VariableError> {
    let name = content
        .trim()
        .strip_prefix(VARIABLE_OPEN)
        .and_then(|s| s.strip_suffix(VARIABLE_CLOSE))
        .ok_or_else(|| VariableError::from_kind(content, VariableErrorKind::MissingDelimiters))?;

    if name.is_empty() {
        Err(VariableError::from_kind(content, VariableErrorKind::EmptyName))
    } else if !is_word(name) {
        Err(VariableError::from_kind(
            content,
            VariableErrorKind::InvalidName {
                name: name.to_string(),
            },
        ))
    } else {
        Ok(Variable {
            name: name.to_string(),
            original: content.to_string(),
        })
    }
}
