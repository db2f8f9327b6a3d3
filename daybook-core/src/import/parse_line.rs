//! Turns one raw text line into a [`RawEntry`].
use super::ImportError;
use crate::entry::RawEntry;
use chrono::NaiveDate;

/// Parses a single `<date><delimiter><title>` line.
///
/// The line is trimmed of surrounding whitespace (terminator included) and
/// split on the first delimiter occurrence only; no quoting or escaping, so a
/// title containing the delimiter keeps everything after the first split
/// point. `line` is the 1-based line number used for error reporting.
pub(super) fn parse_line(
    raw_line: &str,
    line: usize,
    delimiter: char,
    date_format: &str,
) -> Result<RawEntry, ImportError> {
    let trimmed = raw_line.trim();
    let (date_text, title) = match trimmed.split_once(delimiter) {
        Some(fields) => fields,
        None => {
            return Err(ImportError::MalformedLine {
                line,
                text: trimmed.to_string(),
            });
        }
    };

    let date = NaiveDate::parse_from_str(date_text, date_format).map_err(|source| {
        ImportError::MalformedDate {
            line,
            text: date_text.to_string(),
            source,
        }
    })?;

    Ok(RawEntry::new(date, title))
}
