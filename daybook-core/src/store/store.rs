//! The core `EntryStore` value and its query and mutation operations.
use crate::entry::{Entry, RawEntry};
use chrono::NaiveDate;
use std::collections::HashMap;

/// The owning collection of [`Entry`] values plus the next-identifier counter.
///
/// Every mutation returns a new, independent store value; the prior value
/// stays valid and unaffected, so any two stores derived from a common
/// ancestor can be read without coordination. Identifiers start at 1, grow
/// monotonically over the store's lifetime and are never reused, deletions
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStore {
    next_id: u64,
    entries: HashMap<u64, Entry>,
}

impl EntryStore {
    /// Creates an empty store. The first added entry gets id 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: HashMap::new(),
        }
    }

    /// Builds a store by folding [`EntryStore::add_entry`] over `raw_entries`
    /// in iteration order, starting from an empty store.
    ///
    /// The first item gets id 1, the second id 2, and so on. Input order
    /// determines identifier assignment only; the store itself keeps no
    /// ordering.
    pub fn from_raw_entries(raw_entries: impl IntoIterator<Item = RawEntry>) -> Self {
        raw_entries
            .into_iter()
            .fold(Self::new(), |store, raw| store.add_entry(raw))
    }

    /// Returns a new store holding one more entry.
    ///
    /// The entry receives this store's next identifier; callers never pick
    /// one. Infallible: malformed raw input is rejected upstream by the
    /// import parser before it can reach this method.
    pub fn add_entry(&self, raw: RawEntry) -> Self {
        let id = self.next_id;
        let mut entries = self.entries.clone();
        entries.insert(
            id,
            Entry {
                id,
                date: raw.date,
                title: raw.title,
            },
        );
        Self {
            next_id: id + 1,
            entries,
        }
    }

    /// Every entry whose date equals `date` exactly, in ascending id order.
    ///
    /// Returns an empty vec, never an error, when nothing matches.
    pub fn entries_on_date(&self, date: NaiveDate) -> Vec<Entry> {
        let mut matches: Vec<Entry> = self
            .entries
            .values()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect();
        matches.sort_by_key(|entry| entry.id);
        matches
    }

    /// Returns a new store with the entry at `id` replaced by `f(&old)`.
    ///
    /// An absent `id` returns the store unchanged, not an error. The
    /// replacement keeps the original identifier no matter what `f` returns:
    /// the store never re-keys on update, so a closure that rewrites the id
    /// has that field forced back to `id`.
    pub fn update_entry(&self, id: u64, f: impl FnOnce(&Entry) -> Entry) -> Self {
        let mut updated = match self.entries.get(&id) {
            Some(old) => f(old),
            None => return self.clone(),
        };
        updated.id = id;

        let mut entries = self.entries.clone();
        entries.insert(id, updated);
        Self {
            next_id: self.next_id,
            entries,
        }
    }

    /// Returns a new store without the entry at `id`; a no-op when absent.
    ///
    /// The identifier is not freed: later additions keep counting from where
    /// the counter already was.
    pub fn delete_entry(&self, id: u64) -> Self {
        if !self.entries.contains_key(&id) {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.remove(&id);
        Self {
            next_id: self.next_id,
            entries,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// All entries, in ascending id order.
    pub fn entries(&self) -> Vec<Entry> {
        let mut all: Vec<Entry> = self.entries.values().cloned().collect();
        all.sort_by_key(|entry| entry.id);
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The identifier the next added entry will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}
