//! Options and shared state for a single parse.
//!
//! All identity registries live in a `ParseContext` which is created for every
//! parse and passed by reference down to nodes and lines. Nothing is kept in
//! global state, so scripts can be parsed on separate threads without
//! interfering with each other.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::{
    character::{Character, CharacterRegistry},
    consts::{DEFAULT_MAX_INPUT_SIZE, DEFAULT_TAB_WIDTH},
    report::Logger,
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Settings for parsing a script.
///
/// # Examples
/// ```
/// # use yarnling::ParseOptions;
/// let options = ParseOptions::default()
///     .with_tab_width(4)
///     .with_max_input_size(None);
///
/// assert_eq!(options.tab_width, 4);
/// ```
pub struct ParseOptions {
    /// Maximum number of bytes in a parsed input. `None` disables the limit.
    pub max_input_size: Option<usize>,
    /// Number of columns that a tab character counts as when computing indentation.
    pub tab_width: usize,
    /// Whether to log warnings for `<<jump>>` commands with unknown targets.
    pub validate_jumps: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_input_size: Some(DEFAULT_MAX_INPUT_SIZE),
            tab_width: DEFAULT_TAB_WIDTH,
            validate_jumps: true,
        }
    }
}

impl ParseOptions {
    pub fn with_max_input_size(mut self, max_input_size: Option<usize>) -> Self {
        self.max_input_size = max_input_size;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn with_validate_jumps(mut self, validate_jumps: bool) -> Self {
        self.validate_jumps = validate_jumps;
        self
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Registries and settings shared by everything parsed in one call.
pub struct ParseContext {
    /// Settings for the parse.
    pub options: ParseOptions,
    /// Characters encountered so far.
    pub characters: CharacterRegistry,
    /// Warnings collected during the parse.
    pub log: Logger,
    /// Map from line id to the id of the node that owns the line.
    lines: HashMap<String, String>,
    /// Number of ids that have been generated.
    id_counter: u64,
}

impl ParseContext {
    pub fn new(options: ParseOptions) -> Self {
        ParseContext {
            options,
            ..Default::default()
        }
    }

    /// Generate an id which is unique within this context.
    pub fn generate_id(&mut self, prefix: &str) -> String {
        let id = format!("{}_{:08x}", prefix, self.id_counter);
        self.id_counter += 1;

        id
    }

    /// Get the character with the given name, creating it on its first sighting.
    pub fn character(&mut self, name: &str) -> Character {
        let id_counter = &mut self.id_counter;

        self.characters.from_name(name, || {
            let id = format!("character_{:08x}", *id_counter);
            *id_counter += 1;

            id
        })
    }

    /// Register a line id as belonging to a node.
    ///
    /// Returns `false` and leaves the registry untouched if the id is already taken.
    pub(crate) fn register_line(&mut self, line_id: &str, node_id: &str) -> bool {
        if self.lines.contains_key(line_id) {
            false
        } else {
            self.lines.insert(line_id.to_string(), node_id.to_string());
            true
        }
    }

    /// Get the id of the node which owns a line.
    pub fn node_of_line(&self, line_id: &str) -> Option<&str> {
        self.lines.get(line_id).map(|node_id| node_id.as_str())
    }

    /// Number of registered lines.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }
}
