//! Lines of content and the segments that they consist of.

mod command;
mod dialog;
mod line;
pub(crate) mod parse;
mod segment;
mod tag;
mod variable;

pub use command::Command;
pub use dialog::{Dialog, Markup};
pub use line::Line;
pub use segment::Segment;
pub use tag::Tag;
pub use variable::Variable;
