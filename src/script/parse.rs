//! Parse scripts from documents.
//!
//! A document is a list of nodes, each ended by a line with only `===` on it.
//! The nodes are parsed with a shared context so that characters are shared
//! between them and line ids are unique in the whole script.

use std::collections::HashMap;

use crate::{
    consts::NODE_DELIMITER,
    context::{ParseContext, ParseOptions},
    error::ParseError,
    node::Node,
    script::{validate::validate_jumps, Script},
    utils::{enumerate_lines, MetaData},
};

/// Read a script from a string, using default options.
///
/// # Examples
/// ```
/// # use yarnling::read_script_from_string;
/// let content = "\
/// title: Start
/// ---
/// Narrator: You wake up in a cave.
/// <<jump Cave>>
/// ===
/// title: Cave
/// ---
/// It is dark.
/// ===
/// ";
///
/// let script = read_script_from_string(content).unwrap();
///
/// assert_eq!(script.nodes().len(), 2);
/// assert!(script.log().is_empty());
/// ```
pub fn read_script_from_string(content: &str) -> Result<Script, ParseError> {
    read_script_with_options(content, &ParseOptions::default())
}

/// Read a script from a string.
pub fn read_script_with_options(
    content: &str,
    options: &ParseOptions,
) -> Result<Script, ParseError> {
    if let Some(max) = options.max_input_size {
        if content.len() > max {
            return Err(ParseError::InputTooLarge {
                size: content.len(),
                max,
            });
        }
    }

    let normalized = content.replace('\r', "");
    let mut context = ParseContext::new(options.clone());

    let mut nodes: Vec<Node> = Vec::new();
    let mut node_index: HashMap<String, usize> = HashMap::new();

    for (block, meta_data) in split_into_node_blocks(&normalized) {
        let node = Node::parse_with_context(&block, &meta_data, &mut context)?;

        if let Some(&i) = node_index.get(&node.id) {
            return Err(ParseError::DuplicateNodeId {
                id: node.id,
                meta_data: node.meta_data,
                prev_meta_data: nodes[i].meta_data.clone(),
            });
        }

        node_index.insert(node.id.clone(), nodes.len());
        nodes.push(node);
    }

    if nodes.is_empty() {
        return Err(ParseError::Empty);
    }

    log::debug!(
        "parsed script with {} nodes and {} lines",
        nodes.len(),
        context.num_lines()
    );

    if context.options.validate_jumps {
        validate_jumps(&nodes, &mut context.log);
    }

    Ok(Script::from_parts(
        nodes,
        context.characters,
        context.log,
        content,
    ))
}

/// Split a document into the text of its nodes, with the line that each node starts on.
///
/// Every `===` line ends a node. Text after the last delimiter is also a node unless
/// it is blank. Blank lines before a node are not part of it.
fn split_into_node_blocks(content: &str) -> Vec<(String, MetaData)> {
    let mut blocks = Vec::new();
    let mut buffer: Vec<(&str, MetaData)> = Vec::new();

    for (line, meta_data) in enumerate_lines(content, &MetaData::default()) {
        if line.trim() == NODE_DELIMITER {
            blocks.push(buffer.split_off(0));
        } else {
            buffer.push((line, meta_data));
        }
    }

    blocks.push(buffer);

    blocks
        .into_iter()
        .filter_map(|lines| {
            let start = lines.iter().position(|(line, _)| !line.trim().is_empty())?;
            let meta_data = lines[start].1.clone();

            let text = lines[start..]
                .iter()
                .map(|(line, _)| *line)
                .collect::<Vec<_>>()
                .join("\n");

            Some((text, meta_data))
        })
        .collect()
}
