//! Lines of content in a node.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::{
    character::Character,
    consts::LAST_LINE_TAG,
    context::ParseContext,
    error::LineError,
    line::{parse::parse_line, Segment, Tag},
    utils::MetaData,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Single line of content in a node, split into its segments.
///
/// Lines do not own each other. The structure of a node is described by the ids
/// of a line's first child and next sibling, which are resolved through the node
/// or script that owns the lines.
pub struct Line {
    /// Id from the `#line:id` tag if there was one, otherwise generated.
    pub id: String,
    /// Id of the node that the line belongs to.
    pub node_id: String,
    /// Width of the leading whitespace, with tabs counting as several columns.
    pub indentation_level: usize,
    /// Whether the line is an `->` option for the player to pick.
    pub is_option: bool,
    pub character: Option<Character>,
    pub segments: Vec<Segment>,
    /// Tags of the line. Always includes a `line` tag with the line id.
    pub tags: Vec<Tag>,
    pub(crate) first_child: Option<String>,
    pub(crate) next_sibling: Option<String>,
    pub original: String,
    /// Information about the origin of the line in the script.
    pub meta_data: MetaData,
}

impl Line {
    /// Parse a line which belongs to a node.
    ///
    /// The line is parsed in a context of its own. Use `Line::parse_with_context`
    /// to share characters and line ids with other lines.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::Line;
    /// let line = Line::parse("    -> Bob: Sure! #line:12345", "Start").unwrap();
    ///
    /// assert_eq!(&line.id, "12345");
    /// assert_eq!(line.indentation_level, 4);
    /// assert!(line.is_option);
    /// assert_eq!(&line.character.unwrap().name, "Bob");
    /// ```
    pub fn parse(content: &str, node_id: &str) -> Result<Self, LineError> {
        let mut context = ParseContext::default();
        Line::parse_with_context(content, node_id, &MetaData::default(), &mut context)
    }

    /// Parse a line, registering its id and character in a context.
    pub fn parse_with_context(
        content: &str,
        node_id: &str,
        meta_data: &MetaData,
        context: &mut ParseContext,
    ) -> Result<Self, LineError> {
        parse_line(content, node_id, meta_data, context)
    }

    /// Id of the first line nested below this one.
    pub fn first_child(&self) -> Option<&str> {
        self.first_child.as_deref()
    }

    /// Id of the next line at the same level of nesting.
    pub fn next_sibling(&self) -> Option<&str> {
        self.next_sibling.as_deref()
    }

    /// Whether the line has a tag with a key.
    pub fn has_tag(&self, key: &str) -> bool {
        self.get_tag(key).is_some()
    }

    /// Get the first tag with a key.
    pub fn get_tag(&self, key: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.key == key)
    }

    /// Add a tag to the line, unless an identical tag is already present.
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.iter().any(|existing| existing.original == tag.original) {
            false
        } else {
            self.tags.push(tag);
            true
        }
    }

    /// Whether this is the last line before a set of options.
    pub fn is_last_line(&self) -> bool {
        self.has_tag(LAST_LINE_TAG)
    }

    /// Text of the line, with variables left as `{$name}` and commands removed.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Dialog(dialog) => Some(dialog.body.as_str()),
                Segment::Variable(variable) => Some(variable.original.as_str()),
                Segment::Command(..) => None,
            })
            .collect()
    }

    /// Target of the first `<<jump>>` command in the line.
    pub fn jump_target(&self) -> Option<String> {
        self.segments
            .iter()
            .filter_map(Segment::as_command)
            .find_map(|command| command.jump_target())
    }
}
