//! Parse dialog text with bracket markup.
//!
//! Markup comes in four forms:
//!
//! *   `[name param=value flag]` opens a span,
//! *   `[name param=value /]` marks a position in the text,
//! *   `[/name]` closes the innermost open span with the same name,
//! *   `[/]` closes every open span.
//!
//! A bracket preceded by a backslash, or one which does not contain a name,
//! is kept as text.

use std::collections::HashMap;

use crate::{
    consts::{MARKUP_ASSIGNMENT, MARKUP_CLOSE, MARKUP_CLOSER_MARKER, MARKUP_OPEN},
    error::{MarkupError, MarkupErrorKind},
    line::{
        parse::{is_escaped, is_word},
        Dialog, Markup,
    },
    value::{parse_value, Value},
};

#[derive(Clone, Debug, PartialEq)]
/// Bracketed markup item found in dialog text.
enum MarkupItem {
    Open {
        name: String,
        parameters: HashMap<String, Value>,
    },
    SelfClosing {
        name: String,
        parameters: HashMap<String, Value>,
    },
    Close {
        name: String,
    },
    CloseAll,
}

/// Span which has been opened but not yet closed.
struct OpenSpan {
    name: String,
    parameters: HashMap<String, Value>,
    start: usize,
    /// Position of the span in the output, which is ordered by opening.
    slot: usize,
}

/// Text buffer which collapses runs of whitespace while it is written to.
#[derive(Default)]
struct Body {
    text: String,
    num_chars: usize,
    ends_with_space: bool,
}

impl Body {
    fn push_str(&mut self, content: &str) {
        for c in content.chars() {
            if c.is_whitespace() {
                if !self.ends_with_space {
                    self.text.push(' ');
                    self.num_chars += 1;
                }

                self.ends_with_space = true;
            } else {
                self.text.push(c);
                self.num_chars += 1;
                self.ends_with_space = false;
            }
        }
    }
}

/// Parse a `Dialog` from a string.
pub fn parse_dialog(content: &str) -> Result<Dialog, MarkupError> {
    let mut body = Body::default();

    let mut spans: Vec<Option<Markup>> = Vec::new();
    let mut open_spans: Vec<OpenSpan> = Vec::new();

    let mut text_start = 0;
    let mut search_from = 0;

    while let Some((from, to, item)) = find_next_markup(content, search_from) {
        body.push_str(&content[text_start..from]);
        text_start = to;
        search_from = to;

        match item {
            MarkupItem::Open { name, parameters } => {
                open_spans.push(OpenSpan {
                    name,
                    parameters,
                    start: body.num_chars,
                    slot: spans.len(),
                });

                spans.push(None);
            }
            MarkupItem::SelfClosing { name, parameters } => {
                spans.push(Some(Markup {
                    name,
                    start: body.num_chars,
                    length: 0,
                    parameters,
                }));
            }
            MarkupItem::Close { name } => {
                let index = open_spans
                    .iter()
                    .rposition(|span| span.name == name)
                    .ok_or_else(|| {
                        MarkupError::from_kind(content, MarkupErrorKind::UnmatchedCloser { name })
                    })?;

                let span = open_spans.remove(index);
                close_span(span, body.num_chars, &mut spans);
            }
            MarkupItem::CloseAll => {
                for span in open_spans.drain(..) {
                    close_span(span, body.num_chars, &mut spans);
                }
            }
        }
    }

    body.push_str(&content[text_start..]);

    if !open_spans.is_empty() {
        let names = open_spans.into_iter().map(|span| span.name).collect();

        return Err(MarkupError::from_kind(
            content,
            MarkupErrorKind::Unterminated { names },
        ));
    }

    Ok(Dialog {
        body: body.text,
        markup: spans.into_iter().flatten().collect(),
        original: content.to_string(),
    })
}

fn close_span(span: OpenSpan, end: usize, spans: &mut Vec<Option<Markup>>) {
    spans[span.slot] = Some(Markup {
        name: span.name,
        start: span.start,
        length: end - span.start,
        parameters: span.parameters,
    });
}

/// Find the next markup item at or after a byte index.
///
/// Returns the byte range that the item covers in the content.
fn find_next_markup(content: &str, from: usize) -> Option<(usize, usize, MarkupItem)> {
    let mut index = from;

    loop {
        let first_open = index + content[index..].find(MARKUP_OPEN)?;
        let close = first_open + content[first_open..].find(MARKUP_CLOSE)?;

        // Markup cannot contain an opening bracket, so only the last one before
        // the closing bracket can start an item.
        let open = first_open + content[first_open..close].rfind(MARKUP_OPEN)?;
        let interior = &content[open + MARKUP_OPEN.len_utf8()..close];

        if !is_escaped(content, open) {
            if let Some(item) = parse_markup_item(interior) {
                return Some((open, close + MARKUP_CLOSE.len_utf8(), item));
            }
        }

        index = close + MARKUP_CLOSE.len_utf8();
    }
}

/// Parse the content between a pair of brackets.
///
/// Returns `None` if the content does not describe markup.
fn parse_markup_item(interior: &str) -> Option<MarkupItem> {
    let trimmed = interior.trim();

    if let Some(closer) = trimmed.strip_prefix(MARKUP_CLOSER_MARKER) {
        match closer.split_whitespace().next() {
            None => Some(MarkupItem::CloseAll),
            Some(name) if is_word(name) => Some(MarkupItem::Close {
                name: name.to_string(),
            }),
            Some(_) => None,
        }
    } else if let Some(content) = trimmed.strip_suffix(MARKUP_CLOSER_MARKER) {
        parse_name_and_parameters(content)
            .map(|(name, parameters)| MarkupItem::SelfClosing { name, parameters })
    } else {
        parse_name_and_parameters(trimmed)
            .map(|(name, parameters)| MarkupItem::Open { name, parameters })
    }
}

/// Read the name and parameters of opening markup.
///
/// The first item is the name. If it is given a value as in `[wave=2]` that value
/// is added as a parameter with the same name. Other items are either `key=value`
/// pairs or lone keys, which are set to `true`.
fn parse_name_and_parameters(content: &str) -> Option<(String, HashMap<String, Value>)> {
    let mut items = content
        .split_whitespace()
        .map(|item| match item.find(MARKUP_ASSIGNMENT) {
            Some(i) => (
                &item[..i],
                Some(parse_value(&item[i + MARKUP_ASSIGNMENT.len_utf8()..])),
            ),
            None => (item, None),
        });

    let (name, name_value) = items.next()?;

    if !is_word(name) {
        return None;
    }

    let mut parameters = HashMap::new();

    if let Some(value) = name_value {
        parameters.insert(name.to_string(), value);
    }

    for (key, value) in items.filter(|(key, _)| !key.is_empty()) {
        parameters.insert(key.to_string(), value.unwrap_or(Value::Boolean(true)));
    }

    Some((name.to_string(), parameters))
}
