//! Operator-facing rendering of run results.

use crate::bench::{Preparation, RunPlan, RunResult};
use std::fmt;
use std::time::Duration;

/// Displays a duration as `MM min. SS sec. mmm ms.`
///
/// Minutes wrap at the hour, as a clock face would show them.
///
/// # Examples
///
/// ```
/// use dirseek::report::Elapsed;
/// use std::time::Duration;
///
/// let elapsed = Elapsed(Duration::from_millis(61_042));
/// assert_eq!(elapsed.to_string(), "01 min. 01 sec. 042 ms.");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Elapsed(pub Duration);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.0.as_millis();
        write!(
            f,
            "{:02} min. {:02} sec. {:03} ms.",
            millis / 60_000 % 60,
            millis / 1_000 % 60,
            millis % 1_000
        )
    }
}

/// Renders a [`RunResult`] as a multi-line block.
pub struct Report<'a>(pub &'a RunResult);

impl Report<'_> {
    fn heading(plan: RunPlan) -> String {
        match plan {
            RunPlan::Linear => "linear search".to_string(),
            RunPlan::SortThenSearch(sort, search) => format!("{sort} sort + {search} search"),
            RunPlan::Hash => "hash table".to_string(),
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "Start searching ({})...", Self::heading(result.plan))?;
        write!(
            f,
            "Found {} / {} entries. Time taken: {}",
            result.found(),
            result.queries,
            Elapsed(result.total_time())
        )?;

        let Some(phase) = result.preparation else {
            return Ok(());
        };
        match phase.preparation {
            Preparation::Sort { .. } => {
                write!(f, "\nSorting time: {}", Elapsed(phase.elapsed))?;
                if result.fell_back() {
                    f.write_str(" - STOPPED, moved to linear search")?;
                }
            }
            Preparation::Build => write!(f, "\nCreating time: {}", Elapsed(phase.elapsed))?,
        }
        write!(f, "\nSearching time: {}", Elapsed(result.search_time))
    }
}
