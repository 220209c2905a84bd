//! # dirseek
//!
//! `dirseek` measures what it costs to find names in a flat phone directory,
//! trading preprocessing time against query time.
//!
//! Each directory line reads `"<number> <name>"`; the name is the lookup key.
//! Four ways of answering a batch of name queries are compared:
//!
//! - **Linear scan**: no preprocessing, substring match on every line.
//! - **Bubble sort + jump search** and **quicksort + binary search**: sort by
//!   name once, then search the sorted directory.
//! - **Hash index**: build a name to position map, then look names up in O(1).
//!
//! ## Time Budget
//!
//! The first run is always a linear scan. Its duration times a ratio
//! ([`budget::DEFAULT_RATIO`], 10) becomes the budget for every later sort. A
//! sort that exceeds it is abandoned and the run falls back to linear search,
//! since binary and jump search are only correct on sorted input.
//!
//! ## Usage
//!
//! ```rust
//! use dirseek::prelude::*;
//!
//! let directory = vec![
//!     Entry::parse("1 Alice"),
//!     Entry::parse("2 Charlie"),
//!     Entry::parse("3 Bob"),
//! ];
//! let queries = vec!["Bob".to_string(), "Dave".to_string()];
//!
//! let mut bench = Benchmark::new(directory, queries);
//! for result in bench.run_suite(&RunPlan::default_suite()) {
//!     assert_eq!(result.hits, vec!["3 Bob"]);
//! }
//! ```
//!
//! ## Directory Mutation
//!
//! The [`bench::Benchmark`] owns the directory and sorts it in place. A later
//! run sees whatever order an earlier one left behind, including the partial
//! order of an aborted sort.
//!
//! The sorts and searches are generic over [`Record`], so they can be used on
//! plain strings or custom record types outside a benchmark as well.

pub mod bench;
pub mod budget;
pub mod core;
pub mod error;
pub mod load;
pub mod report;
pub mod search;
pub mod sort;

pub use crate::bench::{Benchmark, RunPlan, RunResult};
pub use crate::core::{Entry, Record};
pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::bench::{Benchmark, RunPlan, RunResult, Stage};
    pub use crate::budget::{Deadline, TimeBudget};
    pub use crate::core::{Entry, Record};
    pub use crate::search::{HashIndex, SearchKind};
    pub use crate::sort::{SortKind, SortStatus};
}
