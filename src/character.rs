//! Speakers of dialog lines.
//!
//! A `Character` is identified by its name. The first time a name is seen in a
//! parse a new identity is created for it, and every later line spoken by the
//! same name refers to that identity.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Character who speaks a line of dialog.
pub struct Character {
    /// Opaque identifier, stable for the lifetime of the registry that created it.
    pub id: String,
    /// Name of the character as written in the script.
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Set of characters encountered while parsing, indexed by name.
pub struct CharacterRegistry {
    characters: HashMap<String, Character>,
    /// Names in the order they were first encountered.
    order: Vec<String>,
}

impl CharacterRegistry {
    /// Get the character with the given name, creating it if it has not been seen before.
    ///
    /// The `make_id` closure is only called when a new character is created.
    pub fn from_name<F>(&mut self, name: &str, make_id: F) -> Character
    where
        F: FnOnce() -> String,
    {
        if let Some(character) = self.characters.get(name) {
            return character.clone();
        }

        let character = Character {
            id: make_id(),
            name: name.to_string(),
        };

        log::trace!("registered character '{}' ({})", name, character.id);

        self.order.push(name.to_string());
        self.characters.insert(name.to_string(), character.clone());

        character
    }

    /// Get a character by name if it has been registered.
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    /// Iterate over all characters in the order they were first encountered.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.order
            .iter()
            .filter_map(move |name| self.characters.get(name))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
