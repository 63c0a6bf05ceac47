//! Parser for branching dialog scripts in the Yarn style.
//!
//! A script is a list of nodes. Every node has a header of `key: value` fields,
//! of which `title` is required, and a body of lines, separated by `---`. Nodes
//! are ended by a line with only `===` on it.
//!
//! ```text
//! title: Start
//! ---
//! Narrator: You wake up in a [b]dark[/b] cave. #mood:scared
//! Narrator: Where do you go, {$name}?
//!     -> Left
//!         <<jump LeftTunnel>>
//!     -> Right
//!         <<wait 2>>
//! ===
//! ```
//!
//! Lines are split into dialog, `<<command>>` and `{$variable}` segments. Dialog
//! has its `[markup]` removed and recorded as spans over the text. Indented lines
//! are children of the line above them, which makes the `->` options above the
//! children of the line that asks the question.
//!
//! # Example
//! ```
//! use yarnling::read_script_from_string;
//!
//! let content = "\
//! title: Start
//! ---
//! Narrator: Where do you go?
//!     -> Left
//!     -> Right
//! ===
//! ";
//!
//! let script = read_script_from_string(content).unwrap();
//!
//! let question = script.get_next_line(None).unwrap();
//! assert_eq!(&question.character.as_ref().unwrap().name, "Narrator");
//!
//! let left = script.get_first_child(question.into()).unwrap();
//! let right = script.get_next_line(Some(left.into())).unwrap();
//!
//! assert_eq!(&left.text(), "Left");
//! assert_eq!(&right.text(), "Right");
//! ```
//!
//! Parsing does not run the script. Evaluating commands and following jumps is left
//! to the caller.

#[macro_use]
mod error;

mod character;
mod consts;
mod context;
mod line;
mod node;
mod report;
mod script;
mod utils;
mod value;

pub use character::{Character, CharacterRegistry};
pub use context::{ParseContext, ParseOptions};
pub use error::{
    print_parse_error, CommandError, CommandErrorKind, LineError, LineErrorKind, MarkupError,
    MarkupErrorKind, NodeError, NodeErrorKind, ParseError, VariableError, VariableErrorKind,
};
pub use line::{Command, Dialog, Line, Markup, Segment, Tag, Variable};
pub use node::Node;
pub use report::{LogMessage, Logger, LoggerIter, MessageKind, Warning};
pub use script::{read_script_from_string, read_script_with_options, LineRef, Script};
pub use utils::MetaData;
pub use value::{parse_value, Value};
