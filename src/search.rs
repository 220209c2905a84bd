//! Search strategies over a directory slice.
//!
//! Every search maps a query to `Some(position)` or `None`:
//! - [`linear_search`]: Substring match against the raw record, any order.
//! - [`binary_search`]: Exact key match, requires ascending key order.
//! - [`jump_search`]: Exact key match in `⌊√N⌋` blocks, requires ascending key order.
//! - [`HashIndex`]: Exact key match through a prebuilt map, any order.

use crate::core::Record;
use crate::error::Error;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Linear,
    Jump,
    Binary,
    Hash,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Linear,
        SearchKind::Jump,
        SearchKind::Binary,
        SearchKind::Hash,
    ];

    /// Whether this strategy is only correct on key-sorted input.
    pub fn requires_sorted(self) -> bool {
        matches!(self, SearchKind::Jump | SearchKind::Binary)
    }

    /// Looks up every query in order and returns the positions found.
    ///
    /// [`SearchKind::Hash`] builds a fresh index over `items` first.
    pub fn search_all<T, Q>(self, items: &[T], queries: &[Q]) -> Vec<usize>
    where
        T: Record,
        Q: AsRef<str>,
    {
        let queries = queries.iter().map(AsRef::as_ref);
        match self {
            SearchKind::Linear => queries.filter_map(|q| linear_search(items, q)).collect(),
            SearchKind::Jump => queries.filter_map(|q| jump_search(items, q)).collect(),
            SearchKind::Binary => queries.filter_map(|q| binary_search(items, q)).collect(),
            SearchKind::Hash => {
                let index = HashIndex::build(items);
                queries.filter_map(|q| index.get(q)).collect()
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchKind::Linear => "linear",
            SearchKind::Jump => "jump",
            SearchKind::Binary => "binary",
            SearchKind::Hash => "hash",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownSearch(s.to_string()))
    }
}

/// Returns the first position whose raw record contains `query`.
///
/// This is looser than the key-based searches: `"Bob"` matches `"3 Bobby"`.
///
/// # Examples
///
/// ```
/// use dirseek::search::linear_search;
/// use dirseek::Entry;
///
/// let entries = vec![Entry::parse("1 Alice"), Entry::parse("2 Bobby")];
/// assert_eq!(linear_search(&entries, "Bob"), Some(1));
/// assert_eq!(linear_search(&entries, "Dave"), None);
/// ```
pub fn linear_search<T: Record>(items: &[T], query: &str) -> Option<usize> {
    items.iter().position(|item| item.record().contains(query))
}

/// Midpoint binary search on exact key equality.
pub fn binary_search<T: Record>(items: &[T], query: &str) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let middle = low + (high - low) / 2;
        match items[middle].key().cmp(query) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
        }
    }

    None
}

/// Jump search on exact key equality.
///
/// Probes every `⌊√N⌋`-th key. The first probe whose key exceeds `query`
/// bounds a block; the search then recurses into the keys strictly between the
/// previous probe and that one, translating the result back by the block's
/// offset. Near the end of the slice, where a full jump would overshoot, the
/// probe advances one position at a time.
///
/// # Examples
///
/// ```
/// use dirseek::search::jump_search;
///
/// let keys = ["ant", "bee", "cat", "dog", "eel", "fox", "gnu", "hen", "ibis"];
/// assert_eq!(jump_search(&keys, "eel"), Some(4));
/// assert_eq!(jump_search(&keys, "yak"), None);
/// ```
pub fn jump_search<T: Record>(items: &[T], query: &str) -> Option<usize> {
    let len = items.len();
    let jump = len.isqrt();
    let mut i = 0;
    let mut block_start = 0;

    while i < len {
        match items[i].key().cmp(query) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => {
                return jump_search(&items[block_start..i], query).map(|found| found + block_start);
            }
            Ordering::Less => {
                block_start = i + 1;
                i += if i + jump >= len { 1 } else { jump };
            }
        }
    }

    None
}

/// Exact key to position map over a directory snapshot.
///
/// Keys borrow from the snapshot. When a key repeats, the later position wins.
///
/// # Examples
///
/// ```
/// use dirseek::search::HashIndex;
/// use dirseek::Entry;
///
/// let entries: Vec<Entry> = ["1 Alice", "2 Charlie", "3 Bob"]
///     .into_iter()
///     .map(Entry::parse)
///     .collect();
/// let index = HashIndex::build(&entries);
///
/// assert_eq!(index.get("Bob"), Some(2));
/// assert_eq!(index.get("Dave"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HashIndex<'a> {
    positions: HashMap<&'a str, usize>,
}

impl<'a> HashIndex<'a> {
    pub fn build<T: Record>(items: &'a [T]) -> Self {
        let mut positions = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            positions.insert(item.key(), index);
        }
        Self { positions }
    }

    #[inline]
    pub fn get(&self, query: &str) -> Option<usize> {
        self.positions.get(query).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
