//! Scripts: the full set of nodes parsed from a document.

mod parse;
mod script;
mod validate;

pub use parse::{read_script_from_string, read_script_with_options};
pub use script::{LineRef, Script};
