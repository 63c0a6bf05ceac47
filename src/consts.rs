// Document structure markers
pub const NODE_DELIMITER: &'static str = "===";
pub const META_DELIMITER: &'static str = "---";
pub const META_SEPARATOR: char = ':';

// Line markers
pub const OPTION_MARKER: &'static str = "->";
pub const CHARACTER_SEPARATOR: char = ':';
pub const ESCAPE_MARKER: char = '\\';

// Segment markers
pub const COMMAND_OPEN: &'static str = "<<";
pub const COMMAND_CLOSE: &'static str = ">>";
pub const VARIABLE_OPEN: &'static str = "{$";
pub const VARIABLE_CLOSE: char = '}';
pub const TAG_MARKER: char = '#';
pub const TAG_SEPARATOR: char = ':';

// Markup markers
pub const MARKUP_OPEN: char = '[';
pub const MARKUP_CLOSE: char = ']';
pub const MARKUP_CLOSER_MARKER: char = '/';
pub const MARKUP_ASSIGNMENT: char = '=';

// Reserved keys
pub const TITLE_KEY: &'static str = "title";
pub const LINE_ID_TAG: &'static str = "line";
pub const LAST_LINE_TAG: &'static str = "lastline";
pub const JUMP_COMMAND: &'static str = "jump";

// Defaults
pub const DEFAULT_TAB_WIDTH: usize = 8;
pub const DEFAULT_MAX_INPUT_SIZE: usize = 4 * 1024 * 1024;
