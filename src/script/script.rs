//! Parsed scripts and traversal of their lines.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::{
    character::CharacterRegistry,
    context::ParseOptions,
    error::ParseError,
    line::Line,
    node::Node,
    report::Logger,
    script::parse::read_script_with_options,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Script of nodes with dialog, parsed from a document.
pub struct Script {
    /// Nodes in the order that they appear in the document.
    nodes: Vec<Node>,
    /// Map from node id to index in `nodes`.
    node_index: HashMap<String, usize>,
    /// Map from line id to the index of the node which owns it.
    line_index: HashMap<String, usize>,
    characters: CharacterRegistry,
    log: Logger,
    pub original: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Reference to a line, either directly or by its id.
pub enum LineRef<'a> {
    Line(&'a Line),
    Id(&'a str),
}

impl<'a> From<&'a Line> for LineRef<'a> {
    fn from(line: &'a Line) -> Self {
        LineRef::Line(line)
    }
}

impl<'a> From<&'a str> for LineRef<'a> {
    fn from(id: &'a str) -> Self {
        LineRef::Id(id)
    }
}

impl<'a> From<&'a String> for LineRef<'a> {
    fn from(id: &'a String) -> Self {
        LineRef::Id(id)
    }
}

impl Script {
    /// Parse a script with default options.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        read_script_with_options(content, &ParseOptions::default())
    }

    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        characters: CharacterRegistry,
        log: Logger,
        original: &str,
    ) -> Self {
        let node_index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();

        let line_index = nodes
            .iter()
            .enumerate()
            .flat_map(|(i, node)| node.lines().iter().map(move |line| (line.id.clone(), i)))
            .collect();

        Script {
            nodes,
            node_index,
            line_index,
            characters,
            log,
            original: original.to_string(),
        }
    }

    /// Get a node by its id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// All nodes in the order that they appear in the document.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn first_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Get a line from any node by its id.
    pub fn get_line(&self, id: &str) -> Option<&Line> {
        self.line_index
            .get(id)
            .and_then(|&i| self.nodes[i].get_line(id))
    }

    /// Get the line after a line at the same level of nesting.
    ///
    /// Without a line the first line of the first node is returned. Lines are only
    /// followed within their node: the last line of a node has no next line, even
    /// if more nodes follow it. Lines nested below a line are not visited, use
    /// `get_first_child` to descend into them.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::read_script_from_string;
    /// let content = "\
    /// title: Start
    /// ---
    /// Hello!
    /// How are you?
    /// ===
    /// ";
    ///
    /// let script = read_script_from_string(content).unwrap();
    ///
    /// let first = script.get_next_line(None).unwrap();
    /// let second = script.get_next_line(Some(first.into())).unwrap();
    ///
    /// assert_eq!(&first.text(), "Hello!");
    /// assert_eq!(&second.text(), "How are you?");
    /// assert!(script.get_next_line(Some(second.into())).is_none());
    /// ```
    pub fn get_next_line(&self, from: Option<LineRef>) -> Option<&Line> {
        match from {
            None => self.first_node().and_then(|node| node.first_line()),
            Some(line_ref) => {
                let line = self.resolve(line_ref)?;
                let id = line.next_sibling()?;

                self.get_node(&line.node_id)?.get_line(id)
            }
        }
    }

    /// Get the first line nested below a line.
    pub fn get_first_child(&self, from: LineRef) -> Option<&Line> {
        let line = self.resolve(from)?;
        let id = line.first_child()?;

        self.get_node(&line.node_id)?.get_line(id)
    }

    /// Warnings from parsing the script.
    pub fn log(&self) -> &Logger {
        &self.log
    }

    /// Characters who speak in the script.
    pub fn characters(&self) -> &CharacterRegistry {
        &self.characters
    }

    fn resolve<'a>(&'a self, line_ref: LineRef<'a>) -> Option<&'a Line> {
        match line_ref {
            LineRef::Line(line) => Some(line),
            LineRef::Id(id) => self.get_line(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::script::read_script_from_string;

    fn script() -> Script {
        let content = "\
title: Start
---
Hello! #line:hello
Where to? #line:question
    -> North #line:north
        <<jump North>>
    -> South #line:south
Bye. #line:bye
===
title: North
---
It is cold. #line:cold
It is very cold. #line:very_cold
===
";

        read_script_from_string(content).unwrap()
    }

    #[test]
    fn next_line_without_a_line_is_the_first_line_of_the_first_node() {
        let script = script();

        assert_eq!(&script.get_next_line(None).unwrap().id, "hello");
    }

    #[test]
    fn next_line_can_be_found_from_a_line_or_an_id() {
        let script = script();
        let hello = script.get_line("hello").unwrap();

        assert_eq!(&script.get_next_line(Some(hello.into())).unwrap().id, "question");
        assert_eq!(&script.get_next_line(Some("hello".into())).unwrap().id, "question");
    }

    #[test]
    fn next_line_skips_lines_nested_below_a_line() {
        let script = script();

        assert_eq!(&script.get_next_line(Some("question".into())).unwrap().id, "bye");
        assert_eq!(&script.get_next_line(Some("north".into())).unwrap().id, "south");
    }

    #[test]
    fn first_child_descends_into_nested_lines() {
        let script = script();

        assert_eq!(&script.get_first_child("question".into()).unwrap().id, "north");
        let jump = script.get_first_child("north".into()).unwrap();

        assert_eq!(jump.jump_target(), Some("North".to_string()));
        assert!(script.get_first_child("hello".into()).is_none());
    }

    #[test]
    fn next_line_does_not_continue_into_the_next_node() {
        let script = script();

        assert!(script.get_next_line(Some("bye".into())).is_none());
        assert!(script.get_next_line(Some("very_cold".into())).is_none());
    }

    #[test]
    fn unknown_line_ids_have_no_next_line() {
        let script = script();

        assert!(script.get_line("missing").is_none());
        assert!(script.get_next_line(Some("missing".into())).is_none());
    }

    #[test]
    fn lines_in_any_node_can_be_found_by_id() {
        let script = script();

        assert_eq!(&script.get_line("cold").unwrap().node_id, "North");
        assert_eq!(&script.get_line("south").unwrap().node_id, "Start");
    }

    #[test]
    fn nodes_are_kept_in_document_order() {
        let script = script();

        let ids = script
            .nodes()
            .iter()
            .map(|node| node.id.as_str())
            .collect::<Vec<_>>();

        assert_eq!(&ids, &["Start", "North"]);
        assert_eq!(&script.first_node().unwrap().id, "Start");
        assert!(script.get_node("North").is_some());
        assert!(script.get_node("South").is_none());
    }
}
