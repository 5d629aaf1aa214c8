//! Ordered in-memory collection keyed by record id.

use std::collections::BTreeMap;

use crate::models::Record;

/// One table of records.
///
/// Ids are handed out as `max + 1`, so iterating in key order is the same as
/// iterating in insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next inserted record should carry: `max + 1`, or `1` when empty.
    pub fn next_id(&self) -> i32 {
        self.rows.keys().next_back().map_or(1, |max| max + 1)
    }

    pub fn find(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn find_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Store a record under its own id, replacing any record with the same id.
    pub fn insert(&mut self, record: T) -> &T {
        let id = record.id();
        self.rows.insert(id, record);
        &self.rows[&id]
    }

    /// Remove a single record. Rows that point at it are left alone.
    pub fn remove(&mut self, id: i32) -> Option<T> {
        self.rows.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Record> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}
