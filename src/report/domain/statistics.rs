//! Report values and the pure aggregation rules behind them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task totals for a single user's list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCount {
    /// Every task in the list.
    pub total_tasks: u64,
    /// Tasks marked complete.
    pub completed_tasks: u64,
    /// Tasks still open.
    pub remaining_tasks: u64,
}

impl TaskCount {
    /// Builds the report from the total and completed counts.
    ///
    /// `remaining_tasks` saturates at zero if the counts were taken from
    /// inconsistent snapshots.
    #[must_use]
    pub const fn from_totals(total_tasks: u64, completed_tasks: u64) -> Self {
        Self {
            total_tasks,
            completed_tasks,
            remaining_tasks: total_tasks.saturating_sub(completed_tasks),
        }
    }
}

/// Truncates a completion timestamp to its UTC calendar date.
#[must_use]
pub fn completion_day(completed_at: DateTime<Utc>) -> NaiveDate {
    completed_at.date_naive()
}

/// Floor of `completed` over `days`; zero when no day has elapsed.
#[must_use]
pub const fn average_per_day(completed: u64, days: u64) -> u64 {
    match completed.checked_div(days) {
        Some(average) => average,
        None => 0,
    }
}

/// Returns the calendar date with the most completions.
///
/// Dates are visited in ascending order and only a strictly greater count
/// replaces the current leader, so ties resolve to the earliest date.
/// Returns `None` when there are no completions.
#[must_use]
pub fn most_completed_day<I>(completions: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for completed_at in completions {
        *per_day.entry(completion_day(completed_at)).or_default() += 1;
    }

    let mut leader: Option<(NaiveDate, u64)> = None;
    for (day, count) in per_day {
        match leader {
            Some((_, best)) if count <= best => {}
            _ => leader = Some((day, count)),
        }
    }
    leader.map(|(day, _)| day)
}
