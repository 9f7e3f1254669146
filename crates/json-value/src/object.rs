//! Insertion-ordered object storage.

use indexmap::IndexMap;

use crate::value::Value;

/// Owned collection of uniquely-keyed members.
///
/// Iteration follows insertion order. Re-inserting an existing key keeps the
/// member in its original slot. Member order never affects comparison.
#[derive(Debug, Clone, Default)]
pub struct Object<'a> {
    members: IndexMap<String, Value<'a>>,
}

impl<'a> Object<'a> {
    /// An object with no members.
    pub fn new() -> Self {
        Self {
            members: IndexMap::new(),
        }
    }

    /// An empty object with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a member, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value<'a>>) -> Option<Value<'a>> {
        self.members.insert(key.into(), value.into())
    }

    /// Value of member `key`.
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.members.get(key)
    }

    /// Whether a member named `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// Removes a member, keeping the relative order of the others.
    pub fn remove(&mut self, key: &str) -> Option<Value<'a>> {
        self.members.shift_remove(key)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<'a>)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Members sorted by key.
    pub fn sorted_members(&self) -> Vec<(&str, &Value<'a>)> {
        let mut members: Vec<_> = self.iter().collect();
        members.sort_unstable_by(|a, b| a.0.cmp(b.0));
        members
    }
}

impl<'a, K: Into<String>, V: Into<Value<'a>>> FromIterator<(K, V)> for Object<'a> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}
