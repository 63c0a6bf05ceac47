//! Annotations attached to lines.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::{TAG_MARKER, TAG_SEPARATOR},
    value::{parse_value, Value},
};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A `#key` or `#key:value` annotation on a line.
pub struct Tag {
    pub key: String,
    /// Value after the separator, if one was given.
    pub value: Option<Value>,
    /// Tag as it reads in a script, always starting with `#`.
    pub original: String,
}

impl Tag {
    /// Parse a tag from a string.
    ///
    /// The leading `#` is optional. The key and value are split at the first `:`.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::{Tag, Value};
    /// let tag = Tag::parse("#mood:happy");
    ///
    /// assert_eq!(&tag.key, "mood");
    /// assert_eq!(tag.value, Some(Value::Text("happy".to_string())));
    /// ```
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix(TAG_MARKER).unwrap_or(content);

        let (key, value) = match content.find(TAG_SEPARATOR) {
            Some(i) => (
                &content[..i],
                Some(parse_value(&content[i + TAG_SEPARATOR.len_utf8()..])),
            ),
            None => (content, None),
        };

        Tag {
            key: key.to_string(),
            value,
            original: format!("{}{}", TAG_MARKER, content),
        }
    }

    /// Value of the tag as it was written, before it was read into a `Value`.
    ///
    /// # Examples
    /// ```
    /// # use yarnling::Tag;
    /// assert_eq!(Tag::parse("#line:007").written_value(), Some("007"));
    /// assert_eq!(Tag::parse("#lastline").written_value(), None);
    /// ```
    pub fn written_value(&self) -> Option<&str> {
        self.value.as_ref()?;

        self.original
            .find(TAG_SEPARATOR)
            .map(|i| &self.original[i + TAG_SEPARATOR.len_utf8()..])
    }

    /// Create a tag from its key and value.
    pub fn new(key: &str, value: Option<Value>) -> Self {
        let original = match &value {
            Some(value) => format!("{}{}{}{}", TAG_MARKER, key, TAG_SEPARATOR, value),
            None => format!("{}{}", TAG_MARKER, key),
        };

        Tag {
            key: key.to_string(),
            value,
            original,
        }
    }
}
