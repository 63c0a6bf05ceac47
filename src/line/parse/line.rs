//! Split a single line of a script into its segments.
//!
//! A line is read from left to right, looking for the earliest `<<command>>`,
//! `{$variable}` or `#tag` which is not escaped by a backslash. Tags are removed
//! from the content, while commands and variables split the remaining text into
//! dialog segments.

use crate::{
    consts::{
        CHARACTER_SEPARATOR, COMMAND_CLOSE, COMMAND_OPEN, LINE_ID_TAG, MARKUP_OPEN,
        OPTION_MARKER, TAG_MARKER, TAG_SEPARATOR, VARIABLE_CLOSE, VARIABLE_OPEN,
    },
    context::ParseContext,
    error::{LineError, LineErrorKind},
    line::{
        parse::{
            find_unescaped, is_escaped, parse_command, parse_dialog, parse_variable,
            split_indentation, word_length,
        },
        Line, Segment, Tag,
    },
    report::Warning,
    utils::MetaData,
    value::Value,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Kinds of marked up pieces which can be found in a line.
enum PieceKind {
    Command,
    Variable,
    Tag,
}

/// Search for the `>>` which closes commands.
///
/// The position of the latest match is kept, so that a line with many
/// openers is still only read once.
struct CommandCloser<'a> {
    content: &'a str,
    next: Option<usize>,
    exhausted: bool,
}

impl<'a> CommandCloser<'a> {
    fn new(content: &'a str) -> Self {
        CommandCloser {
            content,
            next: None,
            exhausted: false,
        }
    }

    /// Find the first closer at or after a byte index. The index may not decrease between calls.
    fn find_from(&mut self, from: usize) -> Option<usize> {
        if self.exhausted {
            return None;
        }

        match self.next {
            Some(i) if i >= from => Some(i),
            _ => match self.content[from..].find(COMMAND_CLOSE) {
                Some(i) => {
                    self.next = Some(from + i);
                    self.next
                }
                None => {
                    self.exhausted = true;
                    None
                }
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Content of a line after tags have been removed.
enum Part<'a> {
    Text(String),
    Command(&'a str),
    Variable(&'a str),
}

/// Parse a `Line` from a string.
pub fn parse_line(
    content: &str,
    node_id: &str,
    meta_data: &MetaData,
    context: &mut ParseContext,
) -> Result<Line, LineError> {
    let (indentation_level, trimmed) = split_indentation(content, context.options.tab_width);
    let trimmed = trimmed.trim_end();

    let (is_option, trimmed) = match trimmed.strip_prefix(OPTION_MARKER) {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };

    let (mut parts, tags) = split_parts_and_tags(trimmed);
    trim_parts(&mut parts);

    let character = split_character(&mut parts).map(|name| context.character(&name));

    let segments = parse_segments(parts, context, content, meta_data)?;

    let mut line = Line {
        id: String::new(),
        node_id: node_id.to_string(),
        indentation_level,
        is_option,
        character,
        segments,
        tags: Vec::new(),
        first_child: None,
        next_sibling: None,
        original: content.to_string(),
        meta_data: meta_data.clone(),
    };

    let mut id = None;

    for tag in tags {
        if tag.key == LINE_ID_TAG {
            match tag.written_value() {
                Some(value) => id = Some(value.to_string()),
                None => log::warn!("({}) ignoring '#{}' tag without an id", meta_data, LINE_ID_TAG),
            }
        }

        line.add_tag(tag);
    }

    line.id = match id {
        Some(id) => id,
        None => {
            let id = context.generate_id(LINE_ID_TAG);
            line.add_tag(Tag::new(LINE_ID_TAG, Some(Value::Text(id.clone()))));

            id
        }
    };

    if !context.register_line(&line.id, node_id) {
        return Err(LineError::from_kind(
            content,
            LineErrorKind::DuplicateId { id: line.id },
            meta_data,
        ));
    }

    log::trace!("({}) parsed line '{}' in node '{}'", meta_data, line.id, node_id);

    Ok(line)
}

/// Split content into text, commands and variables, with tags collected separately.
///
/// Text which was on both sides of a tag is joined back together.
fn split_parts_and_tags(content: &str) -> (Vec<Part>, Vec<Tag>) {
    let mut parts = Vec::new();
    let mut tags = Vec::new();

    let mut buffer = String::new();
    let mut text_start = 0;
    let mut index = 0;
    let mut closer = CommandCloser::new(content);

    while let Some(c) = content[index..].chars().next() {
        let found = if is_escaped(content, index) {
            None
        } else {
            match_piece_at(content, index, &mut closer)
        };

        match found {
            Some((length, kind)) => {
                buffer.push_str(&content[text_start..index]);

                let piece = &content[index..index + length];

                match kind {
                    PieceKind::Tag => tags.push(Tag::parse(piece)),
                    PieceKind::Command | PieceKind::Variable => {
                        if !buffer.is_empty() {
                            parts.push(Part::Text(buffer.split_off(0)));
                        }

                        if kind == PieceKind::Command {
                            parts.push(Part::Command(piece));
                        } else {
                            parts.push(Part::Variable(piece));
                        }
                    }
                }

                index += length;
                text_start = index;
            }
            None => index += c.len_utf8(),
        }
    }

    buffer.push_str(&content[text_start..]);

    if !buffer.is_empty() {
        parts.push(Part::Text(buffer));
    }

    (parts, tags)
}

/// Match a marked up piece at a byte index of the content, returning its length in bytes.
fn match_piece_at(
    line: &str,
    index: usize,
    closer: &mut CommandCloser,
) -> Option<(usize, PieceKind)> {
    let content = &line[index..];

    if let Some(rest) = content.strip_prefix(COMMAND_OPEN) {
        // At least one character must be inside the delimiters.
        let first = rest.chars().next()?;
        let inner_start = index + COMMAND_OPEN.len() + first.len_utf8();

        closer
            .find_from(inner_start)
            .map(|i| (i + COMMAND_CLOSE.len() - index, PieceKind::Command))
    } else if let Some(rest) = content.strip_prefix(VARIABLE_OPEN) {
        let name_length = word_length(rest);

        if name_length > 0 && rest[name_length..].starts_with(VARIABLE_CLOSE) {
            let length = VARIABLE_OPEN.len() + name_length + VARIABLE_CLOSE.len_utf8();
            Some((length, PieceKind::Variable))
        } else {
            None
        }
    } else if let Some(rest) = content.strip_prefix(TAG_MARKER) {
        let key_length = word_length(rest);

        if key_length == 0 {
            return None;
        }

        let mut length = TAG_MARKER.len_utf8() + key_length;

        if let Some(value) = rest[key_length..].strip_prefix(TAG_SEPARATOR) {
            let value_length = word_length(value);

            if value_length > 0 {
                length += TAG_SEPARATOR.len_utf8() + value_length;
            }
        }

        Some((length, PieceKind::Tag))
    } else {
        None
    }
}

/// Remove whitespace from the start and end of the content.
fn trim_parts(parts: &mut Vec<Part>) {
    if let Some(Part::Text(text)) = parts.first_mut() {
        *text = text.trim_start().to_string();
    }

    if let Some(Part::Text(text)) = parts.last_mut() {
        *text = text.trim_end().to_string();
    }

    parts.retain(|part| part != &Part::Text(String::new()));
}

/// Remove a leading `Name:` from the content and return the name.
fn split_character(parts: &mut Vec<Part>) -> Option<String> {
    let text = match parts.first_mut() {
        Some(Part::Text(text)) => text,
        _ => return None,
    };

    let index = find_unescaped(text, CHARACTER_SEPARATOR)?;
    let name = text[..index].trim();

    if !is_character_name(name) {
        return None;
    }

    let name = name.to_string();
    *text = text[index + CHARACTER_SEPARATOR.len_utf8()..]
        .trim_start()
        .to_string();

    if text.is_empty() {
        parts.remove(0);
    }

    Some(name)
}

/// Whether text before a separator can be a character name.
///
/// Names cannot be empty and may not contain the start of markup.
fn is_character_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(MARKUP_OPEN)
        && !name.contains(COMMAND_OPEN)
        && !name.contains(VARIABLE_OPEN)
}

/// Parse the parts of a line into segments.
///
/// A line without commands or variables always has a single dialog segment,
/// which may be empty.
fn parse_segments(
    parts: Vec<Part>,
    context: &mut ParseContext,
    line: &str,
    meta_data: &MetaData,
) -> Result<Vec<Segment>, LineError> {
    let has_inline_segments = parts.iter().any(|part| match part {
        Part::Text(..) => false,
        Part::Command(..) | Part::Variable(..) => true,
    });

    if !has_inline_segments {
        let text = parts
            .into_iter()
            .map(|part| match part {
                Part::Text(text) => text,
                _ => String::new(),
            })
            .collect::<String>();

        let dialog =
            parse_dialog(&text).map_err(|err| LineError::from_kind(line, err, meta_data))?;

        return Ok(vec![dialog.into()]);
    }

    parts
        .into_iter()
        .map(|part| match part {
            Part::Text(text) => parse_dialog(&text)
                .map(Segment::from)
                .map_err(|err| LineError::from_kind(line, err, meta_data)),
            Part::Command(content) => {
                let (command, unterminated_quote) = parse_command(content)
                    .map_err(|err| LineError::from_kind(line, err, meta_data))?;

                if unterminated_quote {
                    context.log.add_warning(
                        Warning::UnterminatedQuote {
                            command: content.to_string(),
                        },
                        meta_data,
                    );
                }

                Ok(command.into())
            }
            Part::Variable(content) => parse_variable(content)
                .map(Segment::from)
                .map_err(|err| LineError::from_kind(line, err, meta_data)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::line::{Command, Dialog, Variable};

    fn parse(content: &str) -> Line {
        let mut context = ParseContext::default();
        parse_line(content, "Start", &().into(), &mut context).unwrap()
    }

    fn dialog(content: &str) -> Segment {
        Dialog::parse(content).unwrap().into()
    }

    fn command(content: &str) -> Segment {
        Command::parse(content).unwrap().into()
    }

    fn variable(content: &str) -> Segment {
        Variable::parse(content).unwrap().into()
    }

    #[test]
    fn plain_text_is_a_single_dialog_segment() {
        let line = parse("Hello, world!");

        assert_eq!(&line.segments, &[dialog("Hello, world!")]);
        assert_eq!(&line.node_id, "Start");
        assert_eq!(&line.original, "Hello, world!");
        assert!(!line.is_option);
        assert!(line.character.is_none());
    }

    #[test]
    fn empty_line_has_a_single_empty_dialog_segment() {
        let line = parse("   ");

        assert_eq!(&line.segments, &[dialog("")]);
    }

    #[test]
    fn indentation_counts_tabs_as_eight_spaces() {
        assert_eq!(parse("\t\tText").indentation_level, 16);
        assert_eq!(parse("  Text").indentation_level, 2);
        assert_eq!(parse("\t Text").indentation_level, 9);
    }

    #[test]
    fn tab_width_can_be_set_in_options() {
        let options = crate::context::ParseOptions::default().with_tab_width(4);
        let mut context = ParseContext::new(options);

        let line = parse_line("\t\tText", "Start", &().into(), &mut context).unwrap();

        assert_eq!(line.indentation_level, 8);
    }

    #[test]
    fn arrow_marks_options_and_is_removed_from_content() {
        let line = parse("    -> Sure thing!");

        assert!(line.is_option);
        assert_eq!(line.indentation_level, 4);
        assert_eq!(&line.segments, &[dialog("Sure thing!")]);
    }

    #[test]
    fn leading_name_and_colon_is_the_character() {
        let line = parse("Bob Bergenstein: Hi there.");

        assert_eq!(&line.character.unwrap().name, "Bob Bergenstein");
        assert_eq!(&line.segments, &[dialog("Hi there.")]);
    }

    #[test]
    fn options_can_have_characters() {
        let line = parse("-> Player: Bye!");

        assert!(line.is_option);
        assert_eq!(&line.character.unwrap().name, "Player");
        assert_eq!(&line.segments, &[dialog("Bye!")]);
    }

    #[test]
    fn escaped_colon_is_not_a_character_separator() {
        let line = parse(r"Note\: this is text");

        assert!(line.character.is_none());
    }

    #[test]
    fn only_the_first_colon_separates_the_character() {
        let line = parse("Bob: It is 10:30.");

        assert_eq!(&line.character.unwrap().name, "Bob");
        assert_eq!(&line.segments, &[dialog("It is 10:30.")]);
    }

    #[test]
    fn same_character_name_gives_the_same_character() {
        let mut context = ParseContext::default();

        let one = parse_line("Bob: One", "Start", &().into(), &mut context).unwrap();
        let two = parse_line("Bob: Two", "Start", &().into(), &mut context).unwrap();

        assert_eq!(one.character, two.character);
        assert_eq!(context.characters.len(), 1);
    }

    #[test]
    fn commands_and_variables_split_dialog_into_segments() {
        let line = parse("Hello {$name}, <<wave 2>>how are you?");

        assert_eq!(
            &line.segments,
            &[
                dialog("Hello "),
                variable("{$name}"),
                dialog(", "),
                command("<<wave 2>>"),
                dialog("how are you?"),
            ]
        );
    }

    #[test]
    fn whitespace_between_variables_is_kept_as_dialog() {
        let line = parse("{$first} {$last}");

        assert_eq!(
            &line.segments,
            &[variable("{$first}"), dialog(" "), variable("{$last}")]
        );
        assert_eq!(&line.text(), "{$first} {$last}");
    }

    #[test]
    fn line_with_only_a_command_has_no_dialog() {
        let line = parse("<<jump Cave>>");

        assert_eq!(&line.segments, &[command("<<jump Cave>>")]);
        assert_eq!(line.jump_target(), Some("Cave".to_string()));
    }

    #[test]
    fn character_can_be_followed_by_a_command_only() {
        let line = parse("Bob: <<wave>>");

        assert_eq!(&line.character.unwrap().name, "Bob");
        assert_eq!(&line.segments, &[command("<<wave>>")]);
    }

    #[test]
    fn colon_inside_a_command_is_not_a_character_separator() {
        let line = parse("<<set time: 10>> Later");

        assert!(line.character.is_none());
        assert_eq!(line.segments.len(), 2);
    }

    #[test]
    fn markup_start_before_a_colon_is_not_a_character() {
        let line = parse("[b]Note:[/b] careful");

        assert!(line.character.is_none());
        assert_eq!(&line.text(), "Note: careful");
    }

    #[test]
    fn tags_inside_commands_belong_to_the_command() {
        let line = parse("<<say #hashtag>>");

        assert_eq!(line.tags.len(), 1);
        assert!(line.has_tag(LINE_ID_TAG));
        assert_eq!(&line.segments, &[command("<<say #hashtag>>")]);
    }

    #[test]
    fn escaped_segments_are_kept_as_dialog() {
        let line = parse(r"Type \<<this>> or \{$that} \#here");

        assert_eq!(line.segments.len(), 1);
        assert_eq!(line.tags.len(), 1);
    }

    #[test]
    fn incomplete_segments_are_kept_as_dialog() {
        let line = parse("A <<broken command and {$} and # alone");

        assert_eq!(
            &line.segments,
            &[dialog("A <<broken command and {$} and # alone")]
        );
    }

    #[test]
    fn long_runs_of_command_openers_are_read_as_text() {
        let content = "<".repeat(200_000);

        let line = parse(&content);

        assert_eq!(line.segments.len(), 1);
        assert_eq!(line.text(), content);
    }

    #[test]
    fn many_commands_on_one_line_are_all_found() {
        let content = "<<wait>> ".repeat(1_000);

        let line = parse(&content);
        let commands = line
            .segments
            .iter()
            .filter(|segment| segment.as_command().is_some())
            .count();

        assert_eq!(commands, 1_000);
    }

    #[test]
    fn command_closer_is_found_again_after_an_unclosed_opener_before_it() {
        let line = parse("a << b <<wait>> c");

        let commands = line
            .segments
            .iter()
            .filter_map(|segment| segment.as_command())
            .map(|command| command.original.as_str())
            .collect::<Vec<_>>();

        assert_eq!(commands, vec!["<< b <<wait>>"]);
    }

    #[test]
    fn tags_are_removed_from_content() {
        let line = parse("Oh... #sad #volume:10 hi");

        assert_eq!(&line.segments, &[dialog("Oh...   hi")]);
        assert_eq!(&line.text(), "Oh... hi");
        assert!(line.has_tag("sad"));
        assert_eq!(
            line.get_tag("volume").unwrap().value,
            Some(Value::Number(10.0))
        );
    }

    #[test]
    fn line_tag_sets_the_line_id() {
        let line = parse("Oh hi! #line:12345");

        assert_eq!(&line.id, "12345");
        assert_eq!(&line.segments, &[dialog("Oh hi!")]);
        assert_eq!(
            line.get_tag(LINE_ID_TAG).unwrap().value,
            Some(Value::Number(12345.0))
        );
    }

    #[test]
    fn line_id_is_taken_as_written_in_the_tag() {
        assert_eq!(&parse("Hi #line:007").id, "007");
        assert_eq!(&parse("Hi #line:7").id, "7");
    }

    #[test]
    fn long_numeric_line_ids_stay_distinct() {
        let mut context = ParseContext::default();

        let (first, second) = ("One #line:12345678901234567890", "Two #line:12345678901234567891");

        let one = parse_line(first, "Start", &().into(), &mut context).unwrap();
        let two = parse_line(second, "Start", &().into(), &mut context).unwrap();

        assert_eq!(&one.id, "12345678901234567890");
        assert_eq!(&two.id, "12345678901234567891");
    }

    #[test]
    fn line_without_line_tag_gets_a_generated_id_added_as_a_tag() {
        let line = parse("Oh hi!");
        let tag = line.get_tag(LINE_ID_TAG).unwrap();

        assert!(!line.id.is_empty());
        assert_eq!(tag.value, Some(Value::Text(line.id.clone())));
        assert_eq!(line.tags.len(), 1);
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut context = ParseContext::default();

        let one = parse_line("Same", "Start", &().into(), &mut context).unwrap();
        let two = parse_line("Same", "Start", &().into(), &mut context).unwrap();

        assert_ne!(one.id, two.id);
    }

    #[test]
    fn line_tag_without_value_does_not_set_the_id() {
        let line = parse("Hello #line");

        assert_ne!(&line.id, "line");
        assert_eq!(line.tags.len(), 2);
    }

    #[test]
    fn last_line_tag_wins_when_several_are_given() {
        let line = parse("Hello #line:one #line:two");

        assert_eq!(&line.id, "two");
    }

    #[test]
    fn identical_tags_are_only_added_once() {
        let line = parse("Hello #sad #sad");

        assert_eq!(line.tags.iter().filter(|tag| tag.key == "sad").count(), 1);
    }

    #[test]
    fn duplicate_line_ids_in_a_context_yield_error() {
        let mut context = ParseContext::default();

        parse_line("One #line:1", "Start", &().into(), &mut context).unwrap();

        match parse_line("Two #line:1", "Start", &MetaData::from(3), &mut context) {
            Err(LineError {
                kind: LineErrorKind::DuplicateId { id },
                meta_data,
                ..
            }) => {
                assert_eq!(&id, "1");
                assert_eq!(meta_data, MetaData::from(3));
            }
            other => panic!("expected `DuplicateId` but got {:?}", other),
        }
    }

    #[test]
    fn malformed_markup_yields_line_error() {
        let mut context = ParseContext::default();

        match parse_line("Hi [b]there", "Start", &().into(), &mut context) {
            Err(LineError {
                kind: LineErrorKind::Markup(..),
                line,
                ..
            }) => assert_eq!(&line, "Hi [b]there"),
            other => panic!("expected `Markup` error but got {:?}", other),
        }
    }

    #[test]
    fn malformed_command_yields_line_error() {
        let mut context = ParseContext::default();

        match parse_line("Hi <<$x = 1>>", "Start", &().into(), &mut context) {
            Err(LineError {
                kind: LineErrorKind::MalformedCommand(..),
                ..
            }) => (),
            other => panic!("expected `MalformedCommand` but got {:?}", other),
        }
    }

    #[test]
    fn unterminated_quote_in_command_is_logged_as_warning() {
        let mut context = ParseContext::default();

        parse_line("<<say 'hi>>", "Start", &().into(), &mut context).unwrap();

        assert_eq!(context.log.warnings.len(), 1);
    }

    #[test]
    fn original_is_kept_verbatim() {
        let content = "\t-> Bob: Hi [b]you[/b] {$name} <<wave>> #line:7 #mood";

        assert_eq!(&parse(content).original, content);
    }
}
