mod command;
mod dialog;
mod line;
mod utils;
mod variable;

pub use command::parse_command;
pub use dialog::parse_dialog;
pub use line::parse_line;
pub(crate) use utils::{find_unescaped, is_escaped, is_word, split_indentation, word_length};
pub use variable::parse_variable;
