//! # Named Registry
//!
//! Insertion-ordered storage keyed by name. Entries are never removed, so an
//! entry's position is a stable handle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Anything stored in a [`Registry`].
pub trait Named {
    fn name(&self) -> &str;
}

/// Ordered collection of uniquely named entries.
///
/// Serialized as a plain list; duplicate names are rejected on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<T>",
    into = "Vec<T>",
    bound(serialize = "T: Clone + Serialize", deserialize = "T: Named + Deserialize<'de>")
)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: BTreeMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<T: Named> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position of `name`, creating the entry with `create` when
    /// absent. The flag reports whether a new entry was made.
    pub fn get_or_insert_with(&mut self, name: &str, create: impl FnOnce() -> T) -> (usize, bool) {
        if let Some(&position) = self.index.get(name) {
            return (position, false);
        }
        let position = self.entries.len();
        self.entries.push(create());
        self.index.insert(name.to_string(), position);
        (position, true)
    }

    /// Position of `name`, if present.
    #[inline]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.entries.get(position)
    }

    #[inline]
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.entries.get_mut(position)
    }

    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.position(name).and_then(|position| self.entries.get(position))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Mutable entries in insertion order. Callers must not rename entries.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(Named::name)
    }
}

impl<T: Named> TryFrom<Vec<T>> for Registry<T> {
    type Error = String;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        let mut index = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.name().to_string(), position).is_some() {
                return Err(format!("duplicate name '{}'", entry.name()));
            }
        }
        Ok(Self { entries, index })
    }
}

impl<T> From<Registry<T>> for Vec<T> {
    fn from(registry: Registry<T>) -> Self {
        registry.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        name: String,
        value: u32,
    }

    impl Named for Item {
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn item(name: &str, value: u32) -> Item {
        Item {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_get_or_insert_creates_once() {
        let mut registry = Registry::new();
        assert_eq!(registry.get_or_insert_with("a", || item("a", 1)), (0, true));
        assert_eq!(registry.get_or_insert_with("b", || item("b", 2)), (1, true));
        assert_eq!(registry.get_or_insert_with("a", || item("a", 99)), (0, false));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.by_name("a").map(|i| i.value), Some(1));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut registry = Registry::new();
        for name in ["zeta", "alpha", "mid"] {
            registry.get_or_insert_with(name, || item(name, 0));
        }
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(registry.position("mid"), Some(2));
        assert!(!registry.contains("other"));
    }

    #[test]
    fn test_serde_round_trip_rebuilds_index() {
        let mut registry = Registry::new();
        registry.get_or_insert_with("x", || item("x", 7));
        registry.get_or_insert_with("y", || item("y", 8));

        let json = serde_json::to_string(&registry).unwrap();
        let back: Registry<Item> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, registry);
        assert_eq!(back.position("y"), Some(1));
    }

    #[test]
    fn test_duplicate_names_rejected_on_load() {
        let json = r#"[{"name":"x","value":1},{"name":"x","value":2}]"#;
        assert!(serde_json::from_str::<Registry<Item>>(json).is_err());
    }
}
