//! Core record types for dirseek.
//!
//! This module defines:
//! - [`Entry`]: A parsed directory line (`"<number> <name>"`).
//! - [`Record`]: The trait sorts and searches use to reach a record's key and raw text.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separator between the number and the name in a directory line.
pub const SEPARATOR: char = ' ';

/// A single directory line, split into its lookup key and the full record.
///
/// The key is everything after the first [`SEPARATOR`]. A line without a
/// separator keys on the whole line.
///
/// # Examples
///
/// ```
/// use dirseek::Entry;
///
/// let entry = Entry::parse("8 Marie Curie");
/// assert_eq!(entry.key(), "Marie Curie");
/// assert_eq!(entry.raw(), "8 Marie Curie");
///
/// let bare = Entry::parse("Nobody");
/// assert_eq!(bare.key(), "Nobody");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    raw: String,
    key_start: usize,
}

impl Entry {
    /// Parses a raw directory line. Never fails.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key_start = raw
            .find(SEPARATOR)
            .map_or(0, |pos| pos + SEPARATOR.len_utf8());
        Self { raw, key_start }
    }

    /// The name portion used for sorting and exact lookups.
    #[inline]
    pub fn key(&self) -> &str {
        &self.raw[self.key_start..]
    }

    /// The full line as read.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> String {
        self.raw
    }
}

impl FromStr for Entry {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A trait for reaching the key and raw text of a record without copying.
///
/// Sorts and the exact-match searches compare [`Record::key`]; linear search
/// matches substrings of [`Record::record`]. Plain strings are records whose
/// key is the whole string.
///
/// # Examples
///
/// ```
/// use dirseek::Record;
///
/// struct Contact {
///     name: String,
///     phone: String,
/// }
///
/// impl Record for Contact {
///     fn key(&self) -> &str {
///         &self.name
///     }
///
///     fn record(&self) -> &str {
///         &self.phone
///     }
/// }
/// ```
pub trait Record {
    /// Returns the comparison key.
    fn key(&self) -> &str;

    /// Returns the text linear search scans. Defaults to the key.
    fn record(&self) -> &str {
        self.key()
    }
}

impl Record for Entry {
    #[inline]
    fn key(&self) -> &str {
        Entry::key(self)
    }

    #[inline]
    fn record(&self) -> &str {
        self.raw()
    }
}

impl Record for str {
    fn key(&self) -> &str {
        self
    }
}

impl Record for String {
    fn key(&self) -> &str {
        self
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn record(&self) -> &str {
        (**self).record()
    }
}
