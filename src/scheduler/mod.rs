//! Scheduler: moves a task to its next review date.
//!
//! A task's next date is its *current* review date plus the interval for its
//! stage, so reviewing late doesn't push it out further and reviewing early
//! still advances it. If that date is already overloaded the task is pulled
//! earlier one day at a time (see [`collision`]).
//!
//! The scheduler keeps the task store and the calendar index in step: a task
//! is only ever filed under its current review date.

mod collision;
mod grade;

use chrono::{NaiveDate, TimeDelta};
use log::{debug, info};

use crate::calendar::CalendarIndex;
use crate::domain::Task;
use crate::error::Result;
use crate::interval::interval_for;
use crate::storage::TaskStore;

pub use collision::resolve_collision;
pub use grade::{RESET_GRADE, apply_grade};

/// Maximum tasks shown per session.
pub const DEFAULT_MAX_TASKS: usize = 4;

/// Tasks at or below this stage are never shifted off a crowded day.
pub const DEFAULT_LOW_STAGE_GUARD: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Daily load above which mature tasks are shifted earlier.
    pub max_tasks: usize,
    /// Only stages strictly above this are shifted.
    pub low_stage_guard: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_tasks: DEFAULT_MAX_TASKS,
            low_stage_guard: DEFAULT_LOW_STAGE_GUARD,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Where `task` would land next, without touching anything.
    ///
    /// `calendar` must not already count `task` on the candidate dates.
    pub fn next_review_date(&self, task: &Task, calendar: &CalendarIndex) -> NaiveDate {
        let days = interval_for(task.stage);
        let target = advance(task.review_date, days);
        resolve_collision(target, task.stage, calendar, &self.config)
    }

    /// Advance `task` to its next review date, file it in the store and the
    /// calendar, and persist. Returns the interval used, in days.
    pub fn schedule(&self, task: &mut Task, store: &mut TaskStore, calendar: &mut CalendarIndex) -> Result<i64> {
        let previous = task.review_date;
        calendar.remove(task.id, previous);

        task.review_date = self.next_review_date(task, calendar);
        calendar.insert(task.id, task.review_date);
        store.put(task.clone());

        let days = interval_for(task.stage);
        info!(
            "Scheduled task {} (stage {}): {} -> {} ({} day interval)",
            task.id, task.stage, previous, task.review_date, days
        );
        debug!("{} tasks now due on {}", calendar.count_on(task.review_date), task.review_date);

        store.save()?;
        Ok(days)
    }
}

/// `date + days`, saturating at the calendar's end.
fn advance(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty_store() -> TaskStore {
        TaskStore::load(MemoryBackend::new()).unwrap()
    }

    #[test]
    fn test_schedule_advances_by_stage_interval() {
        let scheduler = Scheduler::default();
        let mut store = empty_store();
        let mut calendar = CalendarIndex::new();
        let mut task = Task::new(0, "lang", "Q", "A", 0, day(2024, 3, 1));

        let days = scheduler.schedule(&mut task, &mut store, &mut calendar).unwrap();

        assert_eq!(days, 1);
        assert_eq!(task.review_date, day(2024, 3, 2));
        assert_eq!(store.get(0).unwrap().review_date, day(2024, 3, 2));
        assert!(calendar.contains(0, day(2024, 3, 2)));
    }

    #[test]
    fn test_schedule_moves_between_buckets() {
        let scheduler = Scheduler::default();
        let mut store = empty_store();
        let mut task = Task::new(5, "lang", "Q", "A", 2, day(2024, 3, 1));
        store.put(task.clone());
        let mut calendar = CalendarIndex::build(store.tasks());

        scheduler.schedule(&mut task, &mut store, &mut calendar).unwrap();

        assert!(!calendar.contains(5, day(2024, 3, 1)));
        assert!(calendar.contains(5, day(2024, 3, 4)));
        assert_eq!(calendar.len(), 1);
    }

    #[test]
    fn test_schedule_advances_from_past_review_date() {
        let scheduler = Scheduler::default();
        let mut store = empty_store();
        let mut task = Task::new(1, "lang", "Q", "A", 4, day(2024, 1, 1));
        task.review_date = day(2024, 2, 1);
        store.put(task.clone());
        let mut calendar = CalendarIndex::build(store.tasks());

        scheduler.schedule(&mut task, &mut store, &mut calendar).unwrap();

        // stage 4 is 8 days, counted from Feb 1 whatever today is
        assert_eq!(task.review_date, day(2024, 2, 9));
    }

    #[test]
    fn test_schedule_persists() {
        let backend = MemoryBackend::new();
        let scheduler = Scheduler::default();
        let mut store = TaskStore::load(backend.clone()).unwrap();
        let mut calendar = CalendarIndex::new();
        let mut task = Task::new(0, "lang", "Q", "A", 0, day(2024, 3, 1));

        scheduler.schedule(&mut task, &mut store, &mut calendar).unwrap();

        let reloaded = TaskStore::load(backend).unwrap();
        assert_eq!(reloaded.get(0), Some(&task));
    }

    #[test]
    fn test_max_stage_uses_cap() {
        let scheduler = Scheduler::default();
        let task = Task::new(0, "lang", "Q", "A", 40, day(2024, 3, 1));
        let next = scheduler.next_review_date(&task, &CalendarIndex::new());
        assert_eq!(next, day(2028, 2, 29));
    }

    #[test]
    fn test_advance_saturates() {
        assert_eq!(advance(NaiveDate::MAX, 10), NaiveDate::MAX);
    }
}
