//! Budgeted in-place sorts (bubble sort and Lomuto quicksort).
//!
//! Both sorts order records ascending by [`Record::key`] and check a
//! [`Deadline`] before every key comparison. When the deadline passes they
//! stop where they are and return [`SortStatus::Aborted`]. The slice is then
//! a partially ordered permutation of the input: nothing is lost or duplicated,
//! so linear search over it is still valid.

use crate::budget::Deadline;
use crate::core::Record;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// How a budgeted sort ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortStatus {
    /// The slice is ordered non-decreasing by key.
    Completed,
    /// The deadline passed first; the slice is only partially ordered.
    Aborted,
}

impl SortStatus {
    pub fn is_completed(self) -> bool {
        self == SortStatus::Completed
    }
}

/// The closed set of sort strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKind {
    Bubble,
    Quick,
}

impl SortKind {
    pub const ALL: [SortKind; 2] = [SortKind::Bubble, SortKind::Quick];

    /// Runs this strategy over `items`.
    pub fn sort<T: Record>(self, items: &mut [T], deadline: &Deadline) -> SortStatus {
        match self {
            SortKind::Bubble => bubble_sort(items, deadline),
            SortKind::Quick => quick_sort(items, deadline),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortKind::Bubble => "bubble",
            SortKind::Quick => "quick",
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownSort(s.to_string()))
    }
}

/// Bubble sort with a shrinking outer bound.
///
/// A pass without swaps ends the sort, so an already sorted slice costs one
/// pass and is left untouched.
///
/// # Examples
///
/// ```
/// use dirseek::budget::Deadline;
/// use dirseek::sort::{bubble_sort, SortStatus};
///
/// let mut names = vec!["Charlie", "Alice", "Bob"];
/// let status = bubble_sort(&mut names, &Deadline::unbounded());
///
/// assert_eq!(status, SortStatus::Completed);
/// assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
/// ```
pub fn bubble_sort<T: Record>(items: &mut [T], deadline: &Deadline) -> SortStatus {
    let len = items.len();
    if len < 2 {
        return SortStatus::Completed;
    }

    for pass in 0..len - 1 {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            if deadline.is_over_budget() {
                return SortStatus::Aborted;
            }
            if items[i].key() > items[i + 1].key() {
                items.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    SortStatus::Completed
}

/// Quicksort with a Lomuto partition around the last element of each range.
///
/// An abort anywhere stops the whole sort: no further partition runs once a
/// deadline check fails. The smaller side is sorted recursively and the larger
/// side iteratively, which keeps recursion depth logarithmic on sorted input.
///
/// # Examples
///
/// ```
/// use dirseek::budget::Deadline;
/// use dirseek::sort::{quick_sort, SortStatus};
/// use dirseek::Entry;
///
/// let mut entries: Vec<Entry> = ["1 Alice", "2 Charlie", "3 Bob"]
///     .into_iter()
///     .map(Entry::parse)
///     .collect();
/// assert_eq!(quick_sort(&mut entries, &Deadline::unbounded()), SortStatus::Completed);
///
/// let raws: Vec<&str> = entries.iter().map(Entry::raw).collect();
/// assert_eq!(raws, vec!["1 Alice", "3 Bob", "2 Charlie"]);
/// ```
pub fn quick_sort<T: Record>(items: &mut [T], deadline: &Deadline) -> SortStatus {
    let mut items = items;

    while items.len() > 1 {
        let Some(pivot) = partition(items, deadline) else {
            return SortStatus::Aborted;
        };

        let (left, rest) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut rest[1..];

        let (smaller, larger) = if left.len() <= right.len() {
            (left, right)
        } else {
            (right, left)
        };
        if !quick_sort(smaller, deadline).is_completed() {
            return SortStatus::Aborted;
        }
        items = larger;
    }

    SortStatus::Completed
}

/// Lomuto partition. Returns the pivot's final position, or `None` if the
/// deadline passed mid-walk.
fn partition<T: Record>(items: &mut [T], deadline: &Deadline) -> Option<usize> {
    let high = items.len() - 1;
    let mut store = 0;

    for i in 0..high {
        if deadline.is_over_budget() {
            return None;
        }
        if items[i].key() <= items[high].key() {
            if i != store {
                items.swap(store, i);
            }
            store += 1;
        }
    }
    items.swap(store, high);

    Some(store)
}
