//! Benchmark orchestration.
//!
//! A [`Benchmark`] owns the directory and the queries and runs one
//! [`RunPlan`] at a time:
//!
//! - **Linear**: `Idle -> Searching -> Reported`. The first linear run also
//!   fixes the [`TimeBudget`] for every later sort.
//! - **Sort then search**: `Idle -> Sorting -> (Sorted | Aborted) -> Searching -> Reported`.
//!   An aborted sort swaps the requested search for linear search.
//! - **Hash**: `Idle -> Building -> Searching -> Reported`.
//!
//! Sorts reorder the owned directory in place and later runs see that order.

use crate::budget::{DEFAULT_RATIO, TimeBudget};
use crate::core::Entry;
use crate::error::Error;
use crate::search::{HashIndex, SearchKind};
use crate::sort::{SortKind, SortStatus};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Where the orchestrator is within the current run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Sorting,
    Sorted,
    Aborted,
    Building,
    Searching,
    Reported,
}

/// One benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunPlan {
    /// Linear search over the directory as it stands.
    Linear,
    /// Sort the directory, then search it.
    SortThenSearch(SortKind, SearchKind),
    /// Build a hash index, then look every query up in it.
    Hash,
}

impl RunPlan {
    /// linear, bubble+jump, quick+binary, hash.
    pub fn default_suite() -> Vec<RunPlan> {
        vec![
            RunPlan::Linear,
            RunPlan::SortThenSearch(SortKind::Bubble, SearchKind::Jump),
            RunPlan::SortThenSearch(SortKind::Quick, SearchKind::Binary),
            RunPlan::Hash,
        ]
    }
}

impl fmt::Display for RunPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPlan::Linear => f.write_str("linear"),
            RunPlan::SortThenSearch(sort, search) => write!(f, "{sort}+{search}"),
            RunPlan::Hash => f.write_str("hash"),
        }
    }
}

impl FromStr for RunPlan {
    type Err = Error;

    /// Accepts `linear`, `hash` or `<sort>+<search>`, e.g. `quick+binary`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(RunPlan::Linear),
            "hash" => Ok(RunPlan::Hash),
            _ => {
                let (sort, search) = s
                    .split_once('+')
                    .ok_or_else(|| Error::InvalidPlan(s.to_string()))?;
                Ok(RunPlan::SortThenSearch(sort.parse()?, search.parse()?))
            }
        }
    }
}

/// The phase that runs before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preparation {
    Sort { kind: SortKind, status: SortStatus },
    Build,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub preparation: Preparation,
    pub elapsed: Duration,
}

/// Outcome of a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub plan: RunPlan,
    /// Raw records found, in query order. Queries with no match are absent.
    pub hits: Vec<String>,
    /// Number of queries looked up.
    pub queries: usize,
    /// Sort or index build, if the plan has one.
    pub preparation: Option<Phase>,
    /// The strategy that actually ran; differs from the plan after an aborted sort.
    pub searched_with: SearchKind,
    pub search_time: Duration,
}

impl RunResult {
    pub fn found(&self) -> usize {
        self.hits.len()
    }

    /// Preparation plus search time.
    pub fn total_time(&self) -> Duration {
        self.preparation.map_or(Duration::ZERO, |phase| phase.elapsed) + self.search_time
    }

    /// `true` when the sort aborted and linear search ran instead.
    pub fn fell_back(&self) -> bool {
        matches!(
            self.preparation,
            Some(Phase {
                preparation: Preparation::Sort {
                    status: SortStatus::Aborted,
                    ..
                },
                ..
            })
        )
    }
}

/// Owns a directory and a query list and benchmarks lookups over them.
///
/// # Examples
///
/// ```
/// use dirseek::bench::{Benchmark, RunPlan};
/// use dirseek::search::SearchKind;
/// use dirseek::sort::SortKind;
/// use dirseek::Entry;
///
/// let directory = ["1 Alice", "2 Charlie", "3 Bob"].into_iter().map(Entry::parse).collect();
/// let queries = vec!["Bob".to_string(), "Dave".to_string()];
/// let mut bench = Benchmark::new(directory, queries);
///
/// let baseline = bench.linear_baseline();
/// assert_eq!(baseline.hits, vec!["3 Bob"]);
/// assert!(bench.budget().is_set());
///
/// let sorted = bench.run(RunPlan::SortThenSearch(SortKind::Quick, SearchKind::Binary));
/// assert_eq!(sorted.found(), 1);
/// ```
#[derive(Debug)]
pub struct Benchmark {
    directory: Vec<Entry>,
    queries: Vec<String>,
    ratio: u32,
    budget: TimeBudget,
    stage: Stage,
}

impl Benchmark {
    pub fn new(directory: Vec<Entry>, queries: Vec<String>) -> Self {
        Self {
            directory,
            queries,
            ratio: DEFAULT_RATIO,
            budget: TimeBudget::unbounded(),
            stage: Stage::Idle,
        }
    }

    /// Multiplier applied to the linear baseline to get the sort budget.
    pub fn with_ratio(mut self, ratio: u32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Starts from an already fixed budget; the baseline will not change it.
    pub fn with_budget(mut self, budget: TimeBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn directory(&self) -> &[Entry] {
        &self.directory
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn budget(&self) -> TimeBudget {
        self.budget
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn into_directory(self) -> Vec<Entry> {
        self.directory
    }

    /// Runs a single plan.
    pub fn run(&mut self, plan: RunPlan) -> RunResult {
        match plan {
            RunPlan::Linear => self.linear_baseline(),
            RunPlan::SortThenSearch(sort, search) => self.sort_then_search(sort, search),
            RunPlan::Hash => self.hash_search(),
        }
    }

    /// Runs `plans` in order, preceded by a linear baseline if the budget is
    /// still unset. A leading [`RunPlan::Linear`] is that baseline.
    pub fn run_suite(&mut self, plans: &[RunPlan]) -> Vec<RunResult> {
        let mut plans = plans.iter().copied().peekable();
        let mut results = Vec::with_capacity(plans.len() + 1);

        if !self.budget.is_set() {
            results.push(self.linear_baseline());
            plans.next_if_eq(&RunPlan::Linear);
        }
        results.extend(plans.map(|plan| self.run(plan)));

        results
    }

    /// Linear search over the directory in its current order.
    ///
    /// The first call fixes the sort budget at `elapsed * ratio`.
    pub fn linear_baseline(&mut self) -> RunResult {
        transition(&mut self.stage, Stage::Searching);
        let started = Instant::now();
        let hits = self.lookup(SearchKind::Linear);
        let search_time = started.elapsed();

        self.budget.set(search_time, self.ratio);

        self.finish(RunResult {
            plan: RunPlan::Linear,
            hits,
            queries: self.queries.len(),
            preparation: None,
            searched_with: SearchKind::Linear,
            search_time,
        })
    }

    /// Sorts the directory under the budget, then searches it.
    ///
    /// If the sort aborts, `search` is replaced by linear search because the
    /// sorted order it needs was never established.
    pub fn sort_then_search(&mut self, sort: SortKind, search: SearchKind) -> RunResult {
        transition(&mut self.stage, Stage::Sorting);
        let deadline = self.budget.start();
        let status = sort.sort(&mut self.directory, &deadline);
        let sort_time = deadline.elapsed();

        let searched_with = match status {
            SortStatus::Completed => {
                transition(&mut self.stage, Stage::Sorted);
                search
            }
            SortStatus::Aborted => {
                transition(&mut self.stage, Stage::Aborted);
                warn!(
                    %sort,
                    %search,
                    ?sort_time,
                    budget = ?self.budget.limit(),
                    "sort exceeded budget, moved to linear search"
                );
                SearchKind::Linear
            }
        };

        transition(&mut self.stage, Stage::Searching);
        let started = Instant::now();
        let hits = self.lookup(searched_with);
        let search_time = started.elapsed();

        self.finish(RunResult {
            plan: RunPlan::SortThenSearch(sort, search),
            hits,
            queries: self.queries.len(),
            preparation: Some(Phase {
                preparation: Preparation::Sort { kind: sort, status },
                elapsed: sort_time,
            }),
            searched_with,
            search_time,
        })
    }

    /// Builds a hash index over the directory as it stands, then looks up
    /// every query in it.
    pub fn hash_search(&mut self) -> RunResult {
        transition(&mut self.stage, Stage::Building);
        let started = Instant::now();
        let index = HashIndex::build(&self.directory);
        let build_time = started.elapsed();
        debug!(keys = index.len(), ?build_time, "hash index built");

        transition(&mut self.stage, Stage::Searching);
        let started = Instant::now();
        let hits: Vec<String> = self
            .queries
            .iter()
            .filter_map(|query| index.get(query))
            .map(|position| self.directory[position].raw().to_owned())
            .collect();
        let search_time = started.elapsed();

        self.finish(RunResult {
            plan: RunPlan::Hash,
            hits,
            queries: self.queries.len(),
            preparation: Some(Phase {
                preparation: Preparation::Build,
                elapsed: build_time,
            }),
            searched_with: SearchKind::Hash,
            search_time,
        })
    }

    fn lookup(&self, search: SearchKind) -> Vec<String> {
        search
            .search_all(&self.directory, &self.queries)
            .into_iter()
            .map(|position| self.directory[position].raw().to_owned())
            .collect()
    }

    fn finish(&mut self, result: RunResult) -> RunResult {
        transition(&mut self.stage, Stage::Reported);
        debug!(
            plan = %result.plan,
            found = result.found(),
            queries = result.queries,
            total = ?result.total_time(),
            "run finished"
        );
        result
    }
}

fn transition(stage: &mut Stage, next: Stage) {
    debug!(from = ?*stage, to = ?next, "stage");
    *stage = next;
}
