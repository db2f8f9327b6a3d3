mod builder;
mod store;

pub use builder::StoreBuilder;
pub use store::EntryStore;
