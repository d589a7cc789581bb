//! Calendar index: review date -> tasks due that day.
//!
//! Derived from the task store at session start and kept in step with it by
//! the scheduler. It is never persisted.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::domain::{Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarIndex {
    days: BTreeMap<NaiveDate, BTreeSet<TaskId>>,
}

impl CalendarIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group tasks by their review date.
    pub fn build<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut index = Self::new();
        for task in tasks {
            index.insert(task.id, task.review_date);
        }
        index
    }

    /// Number of tasks due on exactly `date`.
    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.days.get(&date).map_or(0, BTreeSet::len)
    }

    pub fn insert(&mut self, id: TaskId, date: NaiveDate) {
        self.days.entry(date).or_default().insert(id);
    }

    /// Drop `id` from `date`'s bucket. Empty buckets are removed.
    pub fn remove(&mut self, id: TaskId, date: NaiveDate) -> bool {
        let Some(bucket) = self.days.get_mut(&date) else {
            return false;
        };
        let removed = bucket.remove(&id);
        if bucket.is_empty() {
            self.days.remove(&date);
        }
        removed
    }

    /// Ids due on or before `today`, by date then id.
    pub fn due_through(&self, today: NaiveDate) -> impl Iterator<Item = TaskId> + '_ {
        self.days.range(..=today).flat_map(|(_, ids)| ids.iter().copied())
    }

    /// Returns true if `id` is filed under `date`.
    pub fn contains(&self, id: TaskId, date: NaiveDate) -> bool {
        self.days.get(&date).is_some_and(|ids| ids.contains(&id))
    }

    /// Total number of indexed tasks.
    pub fn len(&self) -> usize {
        self.days.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn task_on(id: TaskId, date: NaiveDate) -> Task {
        let mut task = Task::new(id, "c", "p", "", 0, day(1));
        task.review_date = date;
        task
    }

    #[test]
    fn test_build_groups_by_review_date() {
        let tasks = vec![task_on(0, day(5)), task_on(1, day(5)), task_on(2, day(7))];
        let index = CalendarIndex::build(&tasks);

        assert_eq!(index.count_on(day(5)), 2);
        assert_eq!(index.count_on(day(7)), 1);
        assert_eq!(index.count_on(day(6)), 0);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_remove_drops_empty_bucket() {
        let mut index = CalendarIndex::new();
        index.insert(3, day(2));
        assert!(index.remove(3, day(2)));
        assert!(index.is_empty());
        assert!(!index.remove(3, day(2)));
    }

    #[test]
    fn test_remove_from_wrong_date() {
        let mut index = CalendarIndex::new();
        index.insert(3, day(2));
        assert!(!index.remove(3, day(4)));
        assert!(index.contains(3, day(2)));
    }

    #[test]
    fn test_due_through_orders_by_date_then_id() {
        let tasks = vec![
            task_on(4, day(3)),
            task_on(1, day(9)),
            task_on(2, day(3)),
            task_on(0, day(1)),
            task_on(7, day(5)),
        ];
        let index = CalendarIndex::build(&tasks);
        let due: Vec<_> = index.due_through(day(5)).collect();
        assert_eq!(due, vec![0, 2, 4, 7]);
    }
}
