use std::fmt;
use std::io;

/// A fatal problem found while importing a delimited text resource.
///
/// The import is all-or-nothing: the first malformed line aborts it, and no
/// partial store is returned for the lines already processed.
#[derive(Debug)]
pub enum ImportError {
    /// The line did not split into exactly a date field and a title field.
    MalformedLine { line: usize, text: String },
    /// The date field failed to parse with the configured format.
    MalformedDate {
        line: usize,
        text: String,
        source: chrono::ParseError,
    },
    /// The resource could not be opened or read.
    Io(io::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine { line, text } => {
                write!(f, "line {line}: expected `<date><delimiter><title>`, found `{text}`")
            }
            Self::MalformedDate { line, text, .. } => {
                write!(f, "line {line}: invalid date `{text}`")
            }
            Self::Io(error) => write!(f, "reading import resource: {error}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedLine { .. } => None,
            Self::MalformedDate { source, .. } => Some(source),
            Self::Io(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
