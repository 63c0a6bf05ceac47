//! Check that `<<jump>>` commands lead somewhere.
//!
//! Jumps are only interpreted by whoever runs a script, so a bad target does not
//! fail the parse. Problems are added to the log of the script instead.

use std::collections::HashSet;

use crate::{
    node::Node,
    report::{Logger, Warning},
};

/// Log a warning for every jump without a target or with a target that is not a node.
pub fn validate_jumps(nodes: &[Node], log: &mut Logger) {
    let node_ids = nodes
        .iter()
        .map(|node| node.id.as_str())
        .collect::<HashSet<_>>();

    for node in nodes {
        for (line, target) in node.jump_targets() {
            match target {
                Some(target) if !node_ids.contains(target.as_str()) => log.add_warning(
                    Warning::UnknownJumpTarget {
                        target,
                        node: node.id.clone(),
                    },
                    &line.meta_data,
                ),
                Some(_) => (),
                None => log.add_warning(
                    Warning::JumpWithoutTarget {
                        node: node.id.clone(),
                    },
                    &line.meta_data,
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{context::ParseContext, report::MessageKind, utils::MetaData};

    fn nodes(contents: &[&str]) -> Vec<Node> {
        let mut context = ParseContext::default();

        contents
            .iter()
            .map(|content| Node::parse_with_context(content, &MetaData::default(), &mut context))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn warnings(nodes: &[Node]) -> Vec<Warning> {
        let mut log = Logger::default();
        validate_jumps(nodes, &mut log);

        log.iter()
            .map(|message| match &message.message {
                MessageKind::Warning(warning) => warning.clone(),
            })
            .collect()
    }

    #[test]
    fn jumps_to_existing_nodes_are_valid() {
        let nodes = nodes(&[
            "title: Start\n---\n<<jump End>>",
            "title: End\n---\n<<jump Start>>",
        ]);

        assert!(warnings(&nodes).is_empty());
    }

    #[test]
    fn jumps_to_missing_nodes_are_logged() {
        let nodes = nodes(&["title: Start\n---\nHi\n-> Go\n    <<jump Nowhere>>"]);

        assert_eq!(
            warnings(&nodes),
            vec![Warning::UnknownJumpTarget {
                target: "Nowhere".to_string(),
                node: "Start".to_string(),
            }]
        );
    }

    #[test]
    fn jumps_without_target_are_logged() {
        let nodes = nodes(&["title: Start\n---\n<<jump>>"]);

        assert_eq!(
            warnings(&nodes),
            vec![Warning::JumpWithoutTarget {
                node: "Start".to_string(),
            }]
        );
    }

    #[test]
    fn warnings_point_at_the_line_with_the_jump() {
        let nodes = nodes(&["title: Start\n---\nHi\n<<jump Nowhere>>"]);

        let mut log = Logger::default();
        validate_jumps(&nodes, &mut log);

        assert_eq!(log.warnings[0].meta_data, MetaData::from(3));
    }

    #[test]
    fn other_commands_are_not_checked() {
        let nodes = nodes(&["title: Start\n---\n<<wait Nowhere>>"]);

        assert!(warnings(&nodes).is_empty());
    }
}
