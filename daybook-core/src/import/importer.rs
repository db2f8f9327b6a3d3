//! Streaming import of delimited text resources into a fresh [`EntryStore`].
use super::import_error::ImportError;
use super::parse_line::parse_line;
use crate::config::Config;
use crate::store::{EntryStore, StoreBuilder};
use anyhow::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads `<date><delimiter><title>` lines and builds a store out of them.
///
/// The import is atomic: the first malformed line aborts it with an
/// [`ImportError`] and no partial store escapes. Lines are consumed one at a
/// time in a single forward pass; the resource never has to fit in memory at
/// once.
#[derive(Debug)]
pub struct CsvImporter {
    pub config: Config,
}

impl CsvImporter {
    /// Creates an importer, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates an importer with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Imports a file, one record per line, no header.
    ///
    /// Identifiers are assigned in file order starting at 1.
    pub fn import_file(&self, path: &Path) -> Result<EntryStore, ImportError> {
        let file = File::open(path)?;
        let store = self.import_reader(BufReader::new(file))?;
        log::debug!("imported {} entries from {}", store.len(), path.display());
        Ok(store)
    }

    /// Imports from any buffered line source.
    pub fn import_reader(&self, reader: impl BufRead) -> Result<EntryStore, ImportError> {
        self.import_lines(reader.lines())
    }

    /// Imports from in-memory content, line by line.
    pub fn import_str(&self, content: &str) -> Result<EntryStore, ImportError> {
        self.import_lines(content.lines().map(|line| Ok(line.to_string())))
    }

    fn import_lines(
        &self,
        lines: impl IntoIterator<Item = io::Result<String>>,
    ) -> Result<EntryStore, ImportError> {
        let mut builder = StoreBuilder::begin(&EntryStore::new());
        for (index, line) in lines.into_iter().enumerate() {
            let line = line?;
            let raw = parse_line(
                &line,
                index + 1,
                self.config.delimiter,
                &self.config.date_format,
            )?;
            builder.accept(raw);
        }
        Ok(builder.finish())
    }
}
