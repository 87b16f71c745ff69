//! Generic insertion-ordered table
//!
//! `IndexMap` keeps listing order stable (records come back in creation
//! order, like rows from an append-only table) and the `RwLock` keeps
//! concurrent handlers from observing a half-applied merge.

use indexmap::IndexMap;
use parking_lot::RwLock;

pub struct Table<T> {
    rows: RwLock<IndexMap<String, T>>,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(IndexMap::new()),
        }
    }

    /// All rows in insertion order
    pub fn list(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    /// Rows matching a predicate, in insertion order
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.read().contains_key(id)
    }

    /// True if any row matches the predicate
    pub fn any(&self, pred: impl Fn(&T) -> bool) -> bool {
        self.rows.read().values().any(|row| pred(row))
    }

    /// Store a new row and return the stored value
    pub fn insert(&self, id: String, row: T) -> T {
        self.rows.write().insert(id, row.clone());
        row
    }

    /// Merge in place; returns the updated row, or `None` if absent
    pub fn update(&self, id: &str, merge: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.write();
        let row = rows.get_mut(id)?;
        merge(row);
        Some(row.clone())
    }

    /// Remove by id; reports whether a row was actually removed.
    /// `shift_remove` preserves the insertion order of the remaining rows.
    pub fn remove(&self, id: &str) -> bool {
        self.rows.write().shift_remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Run a closure under the write lock, for multi-step invariants
    /// (e.g. check-then-insert on a unique column).
    pub(crate) fn with_write<R>(&self, f: impl FnOnce(&mut IndexMap<String, T>) -> R) -> R {
        f(&mut self.rows.write())
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_preserves_insertion_order_across_removal() {
        let table: Table<u32> = Table::new();
        table.insert("a".into(), 1);
        table.insert("b".into(), 2);
        table.insert("c".into(), 3);

        assert!(table.remove("b"));
        assert!(!table.remove("b"));
        assert_eq!(table.list(), vec![1, 3]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn update_merges_in_place() {
        let table: Table<u32> = Table::new();
        table.insert("a".into(), 1);

        assert_eq!(table.update("a", |v| *v += 10), Some(11));
        assert_eq!(table.update("missing", |v| *v += 10), None);
        assert_eq!(table.get("a"), Some(11));
    }
}
