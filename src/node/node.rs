#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::{
    context::ParseContext,
    error::NodeError,
    line::Line,
    node::parse::parse_node,
    utils::MetaData,
    value::Value,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Named block of content in a script.
///
/// A node owns all of its lines. They are kept in the order that they appear in
/// the script and are linked to each other by id into a tree, where options and
/// other indented lines are children of the line above them.
pub struct Node {
    /// Id of the node, from its `title` field.
    pub id: String,
    /// Fields of the header, in the order that they were written.
    pub meta: Vec<(String, Value)>,
    lines: Vec<Line>,
    /// Map from line id to index in `lines`.
    index: HashMap<String, usize>,
    pub original: String,
    /// Information about where in the script the node starts.
    pub meta_data: MetaData,
}

impl Node {
    /// Parse a node from its text, using a context of its own.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::Node;
    /// let content = "\
    /// title: Start
    /// ---
    /// Narrator: Where to?
    ///     -> Left
    ///     -> Right
    /// ";
    ///
    /// let node = Node::parse(content).unwrap();
    /// let first = node.first_line().unwrap();
    ///
    /// assert_eq!(&node.id, "Start");
    /// assert!(first.is_last_line());
    /// assert_eq!(node.first_child(first).unwrap().text(), "Left");
    /// ```
    pub fn parse(content: &str) -> Result<Self, NodeError> {
        let mut context = ParseContext::default();
        Node::parse_with_context(content, &MetaData::default(), &mut context)
    }

    /// Parse a node which starts at some line of a script, sharing characters
    /// and line ids through a context.
    pub fn parse_with_context(
        content: &str,
        meta_data: &MetaData,
        context: &mut ParseContext,
    ) -> Result<Self, NodeError> {
        parse_node(content, meta_data, context)
    }

    pub(crate) fn from_parts(
        id: String,
        meta: Vec<(String, Value)>,
        lines: Vec<Line>,
        original: &str,
        meta_data: &MetaData,
    ) -> Self {
        let index = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.id.clone(), i))
            .collect();

        Node {
            id,
            meta,
            lines,
            index,
            original: original.to_string(),
            meta_data: meta_data.clone(),
        }
    }

    /// First line of the node.
    pub fn first_line(&self) -> Option<&Line> {
        self.lines.first()
    }

    /// Get a line of the node by its id.
    pub fn get_line(&self, id: &str) -> Option<&Line> {
        self.index.get(id).map(|&i| &self.lines[i])
    }

    /// All lines of the node in the order that they appear.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the value of a header field.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta
            .iter()
            .find(|(field, _)| field == key)
            .map(|(_, value)| value)
    }

    /// First line nested below a line.
    pub fn first_child(&self, line: &Line) -> Option<&Line> {
        line.first_child().and_then(|id| self.get_line(id))
    }

    /// Next line at the same level of nesting as a line.
    pub fn next_sibling(&self, line: &Line) -> Option<&Line> {
        line.next_sibling().and_then(|id| self.get_line(id))
    }

    /// Targets of every `<<jump>>` command in the node, with the line they were found in.
    pub fn jump_targets(&self) -> Vec<(&Line, Option<String>)> {
        self.lines
            .iter()
            .flat_map(|line| {
                line.segments
                    .iter()
                    .filter_map(|segment| segment.as_command())
                    .filter(|command| command.is_jump())
                    .map(move |command| (line, command.jump_target()))
            })
            .collect()
    }
}
