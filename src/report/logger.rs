use crate::{
    report::{LogMessage, MessageKind, Warning},
    utils::MetaData,
};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Collection of non-fatal messages from parsing a script.
pub struct Logger {
    /// Non-fatal errors and incompatibilities.
    pub warnings: Vec<LogMessage>,
}

impl Logger {
    pub(crate) fn add_warning(&mut self, warning: Warning, meta_data: &MetaData) {
        log::warn!("({}) {}", meta_data, warning);

        self.warnings.push(LogMessage::with_kind(
            MessageKind::Warning(warning),
            meta_data,
        ));
    }

    /// Create an iterator over the log items.
    ///
    /// The iterator visits the messages in the order of their line numbers.
    pub fn iter(&self) -> LoggerIter {
        let mut messages = self.warnings.iter().collect::<Vec<_>>();
        messages.sort_by_key(|message| message.meta_data.line());

        LoggerIter {
            messages: messages.into_iter(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub struct LoggerIter<'a> {
    messages: std::vec::IntoIter<&'a LogMessage>,
}

impl<'a> Iterator for LoggerIter<'a> {
    type Item = &'a LogMessage;

    fn next(&mut self) -> Option<Self::Item> {
        self.messages.next()
    }
}
