//! The begin/accept/finish contract that lets any producer of raw pairs
//! populate a store without depending on its internals.
use super::EntryStore;
use crate::entry::RawEntry;

/// Accumulator for feeding raw pairs into a store one item at a time.
///
/// [`StoreBuilder::begin`] seeds the accumulator from an existing store, so a
/// producer can append into a populated store as well as build a fresh one.
/// The accumulator holds a private snapshot: abandoning it mid-sequence
/// leaves the store passed to `begin` untouched.
///
/// Any iteration source drives construction through the same three calls and
/// gets the identifier-assignment semantics of
/// [`EntryStore::from_raw_entries`]. The [`Extend`] and [`FromIterator`]
/// impls below are the producer-side idioms built on top of it.
#[derive(Debug)]
pub struct StoreBuilder {
    store: EntryStore,
}

impl StoreBuilder {
    /// Starts an accumulation seeded from `store`.
    pub fn begin(store: &EntryStore) -> Self {
        Self {
            store: store.clone(),
        }
    }

    /// Feeds one raw pair. Identifiers are assigned in delivery order.
    pub fn accept(&mut self, raw: RawEntry) {
        self.store = self.store.add_entry(raw);
    }

    /// Extracts the finished store.
    pub fn finish(self) -> EntryStore {
        self.store
    }
}

impl Extend<RawEntry> for StoreBuilder {
    fn extend<T: IntoIterator<Item = RawEntry>>(&mut self, iter: T) {
        for raw in iter {
            self.accept(raw);
        }
    }
}

impl FromIterator<RawEntry> for EntryStore {
    fn from_iter<T: IntoIterator<Item = RawEntry>>(iter: T) -> Self {
        let mut builder = StoreBuilder::begin(&EntryStore::new());
        builder.extend(iter);
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn builder_appends_into_a_populated_store() {
        let base = EntryStore::from_raw_entries([
            RawEntry::new(d(2023, 12, 19), "Dentist"),
            RawEntry::new(d(2023, 12, 20), "Shopping"),
        ]);
        let expected_id = base.next_id();

        let mut builder = StoreBuilder::begin(&base);
        builder.accept(RawEntry::new(d(2023, 12, 21), "Gym"));
        let grown = builder.finish();

        assert_eq!(grown.len(), 3);
        assert_eq!(grown.get(expected_id).unwrap().title, "Gym");
        // The store handed to `begin` is unaffected.
        assert_eq!(base.len(), 2);
        assert_eq!(base.next_id(), expected_id);
    }

    #[test]
    fn abandoned_builder_leaves_the_original_untouched() {
        let base = EntryStore::from_raw_entries([RawEntry::new(d(2023, 12, 19), "Dentist")]);

        let mut builder = StoreBuilder::begin(&base);
        builder.accept(RawEntry::new(d(2023, 12, 20), "Shopping"));
        drop(builder);

        assert_eq!(base.len(), 1);
        assert_eq!(base.next_id(), 2);
    }

    #[test]
    fn from_iterator_matches_from_raw_entries() {
        let raws = [
            RawEntry::new(d(2023, 12, 19), "Dentist"),
            RawEntry::new(d(2023, 12, 20), "Shopping"),
        ];
        let collected: EntryStore = raws.clone().into_iter().collect();
        assert_eq!(collected, EntryStore::from_raw_entries(raws));
    }

    #[test]
    fn extend_feeds_items_in_delivery_order() {
        let mut builder = StoreBuilder::begin(&EntryStore::new());
        builder.extend([
            RawEntry::new(d(2023, 12, 19), "First"),
            RawEntry::new(d(2023, 12, 20), "Second"),
        ]);
        let store = builder.finish();

        assert_eq!(store.get(1).unwrap().title, "First");
        assert_eq!(store.get(2).unwrap().title, "Second");
    }
}
