//! Inline `<<command>>` segments.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::JUMP_COMMAND,
    error::CommandError,
    line::parse::parse_command,
    value::Value,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Command for the runner of a script, with its parameters.
///
/// Commands are not interpreted when parsing. They are handed to whoever consumes
/// the script, with the exception of `<<jump Node>>` which is used to check that
/// the target node exists.
pub struct Command {
    pub name: String,
    /// Parameters in the order that they were given. Duplicates are kept.
    pub parameters: Vec<Value>,
    pub original: String,
}

impl Command {
    /// Parse a command from a string like `<<name param "quoted param">>`.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::{Command, Value};
    /// let command = Command::parse("<<wait 2 'a while'>>").unwrap();
    ///
    /// assert_eq!(&command.name, "wait");
    /// assert_eq!(
    ///     &command.parameters,
    ///     &[Value::Number(2.0), Value::Text("a while".to_string())]
    /// );
    /// ```
    pub fn parse(content: &str) -> Result<Self, CommandError> {
        let (command, unterminated_quote) = parse_command(content)?;

        if unterminated_quote {
            log::warn!("quoted parameter in '{}' is never closed", content);
        }

        Ok(command)
    }

    /// Whether this is a `<<jump>>` command.
    pub fn is_jump(&self) -> bool {
        self.name == JUMP_COMMAND
    }

    /// Name of the node that a `<<jump>>` command targets.
    ///
    /// Returns `None` for other commands and for jumps without a parameter.
    pub fn jump_target(&self) -> Option<String> {
        if self.is_jump() {
            self.parameters.first().map(|target| target.to_string())
        } else {
            None
        }
    }
}
