pub mod config;
pub mod entry;
pub mod import;
pub mod store;

pub use config::Config;
pub use entry::{Entry, RawEntry};
pub use import::{CsvImporter, ImportError};
pub use store::{EntryStore, StoreBuilder};
