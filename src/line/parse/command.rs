//! Parse `<<command>>` segments and their parameters.

use crate::{
    consts::{COMMAND_CLOSE, COMMAND_OPEN},
    error::{CommandError, CommandErrorKind},
    line::{parse::is_word, Command},
    value::{parse_value, Value},
};

/// Parse a `Command` from a string.
///
/// Also returns whether a quoted parameter was left open at the end of the command,
/// in which case the quoted parameter runs to the end of the parameters.
pub fn parse_command(content: &str) -> Result<(Command, bool), CommandError> {
    let inner = content
        .trim()
        .strip_prefix(COMMAND_OPEN)
        .and_then(|s| s.strip_suffix(COMMAND_CLOSE))
        .ok_or_else(|| CommandError::from_kind(content, CommandErrorKind::MissingDelimiters))?;

    let inner = inner.trim_start();

    let (name, parameters) = match inner.find(char::is_whitespace) {
        Some(i) => (&inner[..i], &inner[i..]),
        None => (inner, ""),
    };

    if name.is_empty() {
        return Err(CommandError::from_kind(content, CommandErrorKind::EmptyName));
    }

    if !is_word(name) {
        return Err(CommandError::from_kind(
            content,
            CommandErrorKind::InvalidName {
                name: name.to_string(),
            },
        ));
    }

    let (parameters, unterminated_quote) = split_parameters(parameters);

    let command = Command {
        name: name.to_string(),
        parameters,
        original: content.to_string(),
    };

    Ok((command, unterminated_quote))
}

/// Split a string of parameters at whitespace which is not inside quotes.
///
/// Quote characters which open or close a quoted parameter are removed. A quote
/// character of the other kind inside a quoted parameter is kept as is. Quoted
/// parameters may be empty, other empty parameters are skipped.
fn split_parameters(content: &str) -> (Vec<Value>, bool) {
    let mut parameters = Vec::new();

    let mut buffer = String::new();
    let mut open_quote: Option<char> = None;
    let mut was_quoted = false;

    for c in content.chars() {
        match (c, open_quote) {
            ('\'', None) | ('"', None) => {
                open_quote = Some(c);
                was_quoted = true;
            }
            (c, Some(quote)) if c == quote => {
                open_quote = None;
            }
            (c, None) if c.is_whitespace() => {
                if !buffer.is_empty() || was_quoted {
                    parameters.push(parse_value(&buffer));
                }

                buffer.clear();
                was_quoted = false;
            }
            (c, _) => buffer.push(c),
        }
    }

    if !buffer.is_empty() || was_quoted {
        parameters.push(parse_value(&buffer));
    }

    (parameters, open_quote.is_some())
}
