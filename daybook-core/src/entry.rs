use chrono::NaiveDate;

/// An immutable `{id, date, title}` record.
///
/// Identifiers are assigned by the [`EntryStore`](crate::store::EntryStore)
/// that owns the entry, never by the caller. An "update" produces a new
/// `Entry` value; nothing mutates in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub date: NaiveDate,
    pub title: String,
}

/// An unvalidated `{date, title}` pair, prior to identifier assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub date: NaiveDate,
    pub title: String,
}

impl RawEntry {
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
        }
    }
}
