//! Typed scalar values read from literals in a script.
//!
//! Values appear as command parameters, tag values, markup parameters and node
//! metadata. They are read with a deliberately strict rule: only a plain run of
//! digits is a number, only the exact words `true` and `false` are booleans and
//! everything else is kept as text.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Scalar value of a literal.
pub enum Value {
    /// Number, read from a string of only digits.
    Number(f64),
    /// Either `true` or `false`.
    Boolean(bool),
    /// Any other text, kept verbatim.
    Text(String),
}

/// Parse a raw string token into a `Value`.
///
/// This never fails: anything that is not recognized as a number or boolean
/// is returned as text.
///
/// # Examples
/// ```
/// # use yarnling::{parse_value, Value};
/// assert_eq!(parse_value("100"), Value::Number(100.0));
/// assert_eq!(parse_value("true"), Value::Boolean(true));
/// assert_eq!(parse_value("1.5"), Value::Text("1.5".to_string()));
/// ```
pub fn parse_value(token: &str) -> Value {
    if is_digits(token) {
        match token.parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::Text(token.to_string()),
        }
    } else if token == "true" {
        Value::Boolean(true)
    } else if token == "false" {
        Value::Boolean(false)
    } else {
        Value::Text(token.to_string())
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

impl Value {
    /// Get the number if the value is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Get the boolean if the value is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the text if the value is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
