//! Insertion-ordered string set.
//!
//! Hint lists are accumulated across many table records and then rendered
//! into descriptions, so first-seen order must survive deduplication.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct OrderedSet {
    items: Vec<String>,
    #[serde(skip)]
    seen: FxHashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless an identical string is already present.
    /// Returns true if the value was new.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.insert(value.as_ref());
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Comma-separated rendering used by descriptions and flat exports.
    pub fn joined(&self) -> String {
        self.items.join(", ")
    }
}

impl From<Vec<String>> for OrderedSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = OrderedSet::new();
        set.extend(values);
        set
    }
}

impl From<OrderedSet> for Vec<String> {
    fn from(set: OrderedSet) -> Self {
        set.items
    }
}

impl<'a> FromIterator<&'a str> for OrderedSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = OrderedSet::new();
        set.extend(iter);
        set
    }
}
