//! # Attributes
//!
//! Every entity carries an open-ended bag of string attributes (title, year,
//! director, ...). Reads of unset keys yield `None`; nothing here can fail.
//!
//! The [`Attributes`] trait is the read capability other behavior builds on:
//! anything that can answer `get` can be shared or liked (see [`crate::social`]).

use std::collections::HashMap;

pub const TITLE: &str = "title";
pub const YEAR: &str = "year";
pub const DIRECTOR: &str = "director";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeStore {
    values: HashMap<String, String>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite.
    pub fn set(&mut self, attr: impl Into<String>, value: impl Into<String>) {
        self.values.insert(attr.into(), value.into());
    }

    pub fn get(&self, attr: &str) -> Option<&str> {
        self.values.get(attr).map(String::as_str)
    }

    pub fn contains(&self, attr: &str) -> bool {
        self.values.contains_key(attr)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read access to an entity's attributes.
pub trait Attributes {
    fn get(&self, attr: &str) -> Option<&str>;

    /// The `title` attribute, or the empty string when unset.
    fn title(&self) -> &str {
        self.get(TITLE).unwrap_or_default()
    }
}

impl Attributes for AttributeStore {
    fn get(&self, attr: &str) -> Option<&str> {
        AttributeStore::get(self, attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_key_is_absent() {
        let store = AttributeStore::new();
        assert_eq!(store.get("title"), None);
        assert!(!store.contains("title"));
    }

    #[test]
    fn set_overwrites() {
        let mut store = AttributeStore::new();
        store.set("year", "1998");
        store.set("year", "1999");

        assert_eq!(store.get("year"), Some("1999"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn title_defaults_to_empty() {
        let mut store = AttributeStore::new();
        assert_eq!(store.title(), "");

        store.set(TITLE, "Fight Club");
        assert_eq!(store.title(), "Fight Club");
    }
}
