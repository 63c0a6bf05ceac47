//! Parse nodes and link their lines into a tree.

use std::collections::BTreeMap;

use crate::{
    consts::{LAST_LINE_TAG, META_DELIMITER, META_SEPARATOR, NODE_DELIMITER, TITLE_KEY},
    context::ParseContext,
    error::{NodeError, NodeErrorKind},
    line::{Line, Tag},
    node::Node,
    utils::{enumerate_lines, MetaData},
    value::{parse_value, Value},
};

/// Parse a `Node` from its text.
///
/// The text is split at the first `---` line into a header of `key: value`
/// fields and the content lines. The `title` field is required and becomes the
/// id of the node.
pub fn parse_node(
    content: &str,
    meta_data: &MetaData,
    context: &mut ParseContext,
) -> Result<Node, NodeError> {
    let all_lines = enumerate_lines(content, meta_data);

    let (header, body) = match all_lines
        .iter()
        .position(|(line, _)| line.trim() == META_DELIMITER)
    {
        Some(i) => (&all_lines[..i], &all_lines[i + 1..]),
        None => (&all_lines[..], &all_lines[all_lines.len()..]),
    };

    let meta = parse_header(header, meta_data)?;
    let id = get_node_id(&meta)
        .ok_or_else(|| NodeError::from_kind(NodeErrorKind::MissingTitle, meta_data))?;

    log::debug!("({}) parsing node '{}'", meta_data, id);

    let mut lines = body
        .iter()
        .filter(|(line, _)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && trimmed != NODE_DELIMITER
        })
        .map(|(line, line_meta_data)| {
            Line::parse_with_context(line, &id, line_meta_data, context)
                .map_err(|err| NodeError::from_kind(err, meta_data))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if lines.is_empty() {
        return Err(NodeError::from_kind(
            NodeErrorKind::EmptyNode { node: id },
            meta_data,
        ));
    }

    build_tree(&mut lines);

    Ok(Node::from_parts(id, meta, lines, content, meta_data))
}

/// Parse the `key: value` fields of a node header.
fn parse_header(
    lines: &[(&str, MetaData)],
    node_meta_data: &MetaData,
) -> Result<Vec<(String, Value)>, NodeError> {
    lines
        .iter()
        .filter(|(line, _)| !line.trim().is_empty())
        .map(|(line, meta_data)| match line.find(META_SEPARATOR) {
            Some(i) => {
                let key = line[..i].trim().to_string();
                let value = parse_value(line[i + META_SEPARATOR.len_utf8()..].trim());

                Ok((key, value))
            }
            None => Err(NodeError::from_kind(
                NodeErrorKind::MalformedMetadata {
                    line: line.to_string(),
                    meta_data: meta_data.clone(),
                },
                node_meta_data,
            )),
        })
        .collect()
}

/// Get the node id from its `title` field, if the field is set.
fn get_node_id(meta: &[(String, Value)]) -> Option<String> {
    meta.iter()
        .find(|(key, _)| key == TITLE_KEY)
        .map(|(_, value)| value.to_string())
        .filter(|id| !id.is_empty())
}

/// Link lines into a tree by their indentation.
///
/// A line which is indented further than the line before it becomes the first
/// child of that line. Otherwise it is the next sibling of the latest line seen
/// at the same indentation.
///
/// An option whose previous line sits at the nearest enclosing level tags that
/// line as the last line before the options. Options at the lowest level have no
/// enclosing level: there the previous line is tagged if it is at the same level
/// and is not itself an option.
fn build_tree(lines: &mut [Line]) {
    // Latest line seen at every level of indentation.
    let mut levels: BTreeMap<usize, usize> = BTreeMap::new();

    for current in 0..lines.len() {
        let level = lines[current].indentation_level;

        if current > 0 {
            let previous = current - 1;
            let previous_level = lines[previous].indentation_level;
            let id = lines[current].id.clone();

            if level > previous_level {
                lines[previous].first_child = Some(id);
            } else if let Some(&sibling) = levels.get(&level) {
                lines[sibling].next_sibling = Some(id);
            }

            let is_last_line = match levels.range(..level).next_back() {
                Some((&parent_level, _)) => previous_level == parent_level,
                None => previous_level == level && !lines[previous].is_option,
            };

            if lines[current].is_option && is_last_line {
                lines[previous].add_tag(Tag::new(LAST_LINE_TAG, None));
            }
        }

        levels.insert(level, current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Node {
        let mut context = ParseContext::default();
        parse_node(content, &().into(), &mut context).unwrap()
    }

    fn parse_error(content: &str) -> NodeErrorKind {
        let mut context = ParseContext::default();

        match parse_node(content, &().into(), &mut context) {
            Err(err) => err.kind,
            Ok(node) => panic!("expected an error but parsed {:?}", node),
        }
    }

    /// Get lines by their text.
    fn line<'a>(node: &'a Node, text: &str) -> &'a Line {
        node.lines()
            .iter()
            .find(|line| line.text() == text)
            .unwrap()
    }

    fn ids(lines: &[Option<&Line>]) -> Vec<Option<String>> {
        lines
            .iter()
            .map(|line| line.map(|line| line.id.clone()))
            .collect()
    }

    #[test]
    fn title_field_becomes_the_node_id() {
        let node = parse("title: Start\n---\nHello!");

        assert_eq!(&node.id, "Start");
        assert_eq!(node.lines().len(), 1);
        assert_eq!(&node.lines()[0].node_id, "Start");
    }

    #[test]
    fn header_fields_are_kept_in_order_with_typed_values() {
        let node = parse("title: Start\ntags: intro\nposition: 100\nvisited: false\n---\nHello!");

        assert_eq!(
            &node.meta,
            &[
                ("title".to_string(), Value::Text("Start".to_string())),
                ("tags".to_string(), Value::Text("intro".to_string())),
                ("position".to_string(), Value::Number(100.0)),
                ("visited".to_string(), Value::Boolean(false)),
            ]
        );
        assert_eq!(node.meta("position"), Some(&Value::Number(100.0)));
        assert_eq!(node.meta("colorID"), None);
    }

    #[test]
    fn header_values_are_split_at_the_first_separator() {
        let node = parse("title: Start\nposition: 10:20\n---\nHello!");

        assert_eq!(
            node.meta("position"),
            Some(&Value::Text("10:20".to_string()))
        );
    }

    #[test]
    fn numeric_titles_give_ids_without_decimals() {
        assert_eq!(&parse("title: 2\n---\nHello!").id, "2");
    }

    #[test]
    fn blank_lines_and_node_delimiters_are_not_content() {
        let node = parse("title: Start\n---\n\nOne\n   \nTwo\n===\n");

        assert_eq!(node.lines().len(), 2);
    }

    #[test]
    fn lines_know_their_position_in_the_script() {
        let mut context = ParseContext::default();
        let node = parse_node(
            "title: Start\n---\nOne\n\nTwo",
            &MetaData::from(10),
            &mut context,
        )
        .unwrap();

        assert_eq!(node.meta_data, MetaData::from(10));
        assert_eq!(node.lines()[0].meta_data, MetaData::from(12));
        assert_eq!(node.lines()[1].meta_data, MetaData::from(14));
    }

    #[test]
    fn original_is_kept_verbatim() {
        let content = "title: Start\n---\n  Hello!\n-> Option\n";

        assert_eq!(&parse(content).original, content);
    }

    #[test]
    fn missing_title_yields_error() {
        match parse_error("tags: intro\n---\nHello!") {
            NodeErrorKind::MissingTitle => (),
            other => panic!("expected `MissingTitle` but got {:?}", other),
        }
    }

    #[test]
    fn empty_title_yields_error() {
        match parse_error("title:\n---\nHello!") {
            NodeErrorKind::MissingTitle => (),
            other => panic!("expected `MissingTitle` but got {:?}", other),
        }
    }

    #[test]
    fn node_without_header_delimiter_has_no_content() {
        match parse_error("title: Start") {
            NodeErrorKind::EmptyNode { node } => assert_eq!(&node, "Start"),
            other => panic!("expected `EmptyNode` but got {:?}", other),
        }
    }

    #[test]
    fn node_with_only_blank_lines_yields_error() {
        match parse_error("title: Start\n---\n\n   \n") {
            NodeErrorKind::EmptyNode { .. } => (),
            other => panic!("expected `EmptyNode` but got {:?}", other),
        }
    }

    #[test]
    fn header_line_without_separator_yields_error() {
        match parse_error("title: Start\nnot a field\n---\nHello!") {
            NodeErrorKind::MalformedMetadata { line, meta_data } => {
                assert_eq!(&line, "not a field");
                assert_eq!(meta_data, MetaData::from(1));
            }
            other => panic!("expected `MalformedMetadata` but got {:?}", other),
        }
    }

    #[test]
    fn errors_in_lines_are_wrapped_with_the_node_position() {
        let mut context = ParseContext::default();

        match parse_node("title: Start\n---\nHi [b]there", &MetaData::from(5), &mut context) {
            Err(NodeError {
                kind: NodeErrorKind::LineError(err),
                node_meta_data,
            }) => {
                assert_eq!(node_meta_data, MetaData::from(5));
                assert_eq!(err.meta_data, MetaData::from(7));
            }
            other => panic!("expected `LineError` but got {:?}", other),
        }
    }

    #[test]
    fn lines_at_the_same_level_are_siblings() {
        let node = parse("title: Start\n---\nOne\nTwo\nThree");
        let lines = node.lines();

        assert_eq!(lines[0].next_sibling(), Some(lines[1].id.as_str()));
        assert_eq!(lines[1].next_sibling(), Some(lines[2].id.as_str()));
        assert_eq!(lines[2].next_sibling(), None);
        assert!(lines.iter().all(|line| line.first_child().is_none()));
    }

    #[test]
    fn options_are_children_of_the_line_before_them() {
        let node = parse(
            "\
title: Start
---
A
B
    -> C
        D
    -> E
    -> F
G
",
        );

        let b = line(&node, "B");
        let c = line(&node, "C");

        assert_eq!(
            ids(&[
                node.first_child(b),
                node.next_sibling(c),
                node.first_child(c),
                node.next_sibling(b)
            ]),
            ids(&[
                Some(line(&node, "C")),
                Some(line(&node, "E")),
                Some(line(&node, "D")),
                Some(line(&node, "G"))
            ])
        );

        assert_eq!(node.next_sibling(line(&node, "E")), Some(line(&node, "F")));
        assert_eq!(node.next_sibling(line(&node, "F")), None);
        assert_eq!(node.next_sibling(line(&node, "D")), None);
    }

    #[test]
    fn line_before_a_set_of_options_is_the_last_line() {
        let node = parse(
            "\
title: Start
---
A
B
    -> C
        D
    -> E
    -> F
G
",
        );

        let last_lines = node
            .lines()
            .iter()
            .filter(|line| line.is_last_line())
            .map(|line| line.text())
            .collect::<Vec<_>>();

        assert_eq!(&last_lines, &["B"]);
    }

    #[test]
    fn nested_sets_of_options_mark_their_own_last_line() {
        let node = parse(
            "\
title: Start
---
Question?
    -> Yes
        Really?
            -> Sure
            -> No
    -> No
",
        );

        let last_lines = node
            .lines()
            .iter()
            .filter(|line| line.is_last_line())
            .map(|line| line.text())
            .collect::<Vec<_>>();

        assert_eq!(&last_lines, &["Question?", "Really?"]);
    }

    #[test]
    fn options_at_the_top_level_mark_only_the_line_before_the_first() {
        let node = parse("title: Start\n---\nPick one.\n-> One\n-> Two\n-> Three");

        let last_lines = node
            .lines()
            .iter()
            .filter(|line| line.is_last_line())
            .map(|line| line.text())
            .collect::<Vec<_>>();

        assert_eq!(&last_lines, &["Pick one."]);
        assert_eq!(
            node.next_sibling(line(&node, "One")),
            Some(line(&node, "Two"))
        );
    }

    #[test]
    fn lines_link_to_the_latest_line_at_their_level_across_deeper_branches() {
        let node = parse("title: Start\n---\nA\n    B\nC\n        D\n    E");

        assert_eq!(node.next_sibling(line(&node, "A")), Some(line(&node, "C")));
        assert_eq!(node.next_sibling(line(&node, "B")), Some(line(&node, "E")));
        assert_eq!(node.first_child(line(&node, "C")), Some(line(&node, "D")));
        assert_eq!(node.next_sibling(line(&node, "D")), None);
        assert_eq!(node.next_sibling(line(&node, "E")), None);
    }

    #[test]
    fn every_line_is_reachable_from_the_first_line() {
        let node = parse("title: Start\n---\nA\n    B\nC\n        D\n    E");

        let mut reached = Vec::new();
        let mut stack = vec![node.first_line().unwrap()];

        while let Some(current) = stack.pop() {
            reached.push(current.text());
            stack.extend(node.next_sibling(current));
            stack.extend(node.first_child(current));
        }

        reached.sort();
        assert_eq!(&reached, &["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn previous_line_away_from_the_enclosing_level_is_not_the_last_line() {
        let node = parse("title: Start\n---\nP\n  S\nQ\n    -> O");

        assert!(!line(&node, "Q").is_last_line());
        assert!(!line(&node, "S").is_last_line());
        assert_eq!(node.first_child(line(&node, "Q")), Some(line(&node, "O")));
    }

    #[test]
    fn lines_can_be_found_by_id() {
        let node = parse("title: Start\n---\nOne #line:first\nTwo #line:second");

        assert_eq!(node.get_line("second").unwrap().text(), "Two");
        assert_eq!(node.first_line().unwrap().id, "first");
        assert!(node.get_line("third").is_none());
    }

    #[test]
    fn jump_targets_are_collected_from_all_lines() {
        let node = parse("title: Start\n---\n-> Left\n    <<jump Left>>\n-> Back\n    <<jump>>");

        let targets = node
            .jump_targets()
            .into_iter()
            .map(|(_, target)| target)
            .collect::<Vec<_>>();

        assert_eq!(targets, vec![Some("Left".to_string()), None]);
    }
}
