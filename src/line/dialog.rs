//! Dialog text segments and the markup spans inside them.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::{error::MarkupError, line::parse::parse_dialog, value::Value};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Plain text of a line with its markup removed.
pub struct Dialog {
    /// Text with markup removed and runs of whitespace collapsed to single spaces.
    pub body: String,
    /// Markup spans over the body, in the order that they were opened.
    pub markup: Vec<Markup>,
    pub original: String,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Span of bracket markup such as `[wave size=2]text[/wave]` over a dialog body.
///
/// Positions count characters, not bytes.
pub struct Markup {
    pub name: String,
    /// Position of the first marked character in the body.
    pub start: usize,
    /// Number of marked characters. Self-closing markup like `[pause /]` has length 0.
    pub length: usize,
    pub parameters: HashMap<String, Value>,
}

impl Dialog {
    /// Parse dialog text and its markup.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::Dialog;
    /// let dialog = Dialog::parse("Oh, [wave]hello[/wave] there!").unwrap();
    ///
    /// assert_eq!(&dialog.body, "Oh, hello there!");
    /// assert_eq!(dialog.markup[0].start, 4);
    /// assert_eq!(dialog.markup[0].length, 5);
    /// ```
    pub fn parse(content: &str) -> Result<Self, MarkupError> {
        parse_dialog(content)
    }

    /// Get the first markup span with a name.
    pub fn get_markup(&self, name: &str) -> Option<&Markup> {
        self.markup.iter().find(|markup| markup.name == name)
    }
}

impl Markup {
    /// Text of the body which this span covers.
    pub fn text<'a>(&self, body: &'a str) -> &'a str {
        let mut indices = body
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(body.len()));

        let from = indices.nth(self.start).unwrap_or(body.len());
        let to = match self.length {
            0 => from,
            length => indices.nth(length - 1).unwrap_or(body.len()),
        };

        &body[from..to]
    }
}
