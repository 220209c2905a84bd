//! Adaptive timeout policy for sorts.
//!
//! The budget starts unbounded and is fixed once, from the first unsorted
//! linear-search baseline, at `baseline * ratio`. Every later sort receives a
//! [`Deadline`] and checks it on each comparison.

use cuneiform::cuneiform;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// A sort may take up to this many baseline linear scans before it is abandoned.
pub const DEFAULT_RATIO: u32 = 10;

/// Process-lifetime sort budget. Set once, never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeBudget {
    limit: Option<Duration>,
}

impl TimeBudget {
    /// A budget that never expires.
    pub const fn unbounded() -> Self {
        Self { limit: None }
    }

    /// A fixed budget, bypassing the baseline measurement.
    pub const fn fixed(limit: Duration) -> Self {
        Self { limit: Some(limit) }
    }

    /// Sets the budget to `baseline * ratio`.
    ///
    /// Only the first call has an effect. Returns `true` if this call set it.
    pub fn set(&mut self, baseline: Duration, ratio: u32) -> bool {
        if let Some(limit) = self.limit {
            debug!(?limit, "time budget already set, ignoring");
            return false;
        }
        let limit = baseline.saturating_mul(ratio);
        info!(?baseline, ratio, ?limit, "time budget set");
        self.limit = Some(limit);
        true
    }

    pub fn is_set(&self) -> bool {
        self.limit.is_some()
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    /// Returns `true` once the time elapsed since `start` has reached the budget.
    ///
    /// An unbounded budget is never exceeded.
    #[inline]
    pub fn is_over_budget(&self, start: Instant) -> bool {
        match self.limit {
            Some(limit) => start.elapsed() >= limit,
            None => false,
        }
    }

    /// Starts the clock for one sort.
    pub fn start(&self) -> Deadline {
        Deadline {
            started: Instant::now(),
            budget: *self,
        }
    }
}

/// A running sort clock: the start instant plus the budget it is held to.
///
/// Read on every comparison, so it sits alone in a cache line.
#[cuneiform]
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    started: Instant,
    budget: TimeBudget,
}

impl Deadline {
    /// A deadline that never expires, for sorting outside a benchmark.
    pub fn unbounded() -> Self {
        TimeBudget::unbounded().start()
    }

    #[inline(always)]
    pub fn is_over_budget(&self) -> bool {
        self.budget.is_over_budget(self.started)
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
