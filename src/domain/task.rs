//! Task record
//!
//! A task is a prompt the user wants to keep remembering. Its `stage` drives
//! how far apart reviews are spaced and `review_date` is the next day it is due.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sequential task identifier handed out by the store's counter.
pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    //=== Identity ===
    pub id: TaskId,

    //=== Content ===
    /// Free-text label, only used for filtering
    pub category: String,

    /// The recall cue shown to the user
    pub prompt: String,

    /// Revealed when the task is reset with grade 0
    #[serde(default)]
    pub answer: String,

    //=== Scheduling State ===
    /// Index into the interval schedule
    pub stage: u32,

    pub creation_date: NaiveDate,

    /// Next day this task is due
    pub review_date: NaiveDate,
}

impl Task {
    /// Create a task due on `today`. The caller schedules it afterwards.
    pub fn new(
        id: TaskId,
        category: impl Into<String>,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        stage: u32,
        today: NaiveDate,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            prompt: prompt.into(),
            answer: answer.into(),
            stage,
            creation_date: today,
            review_date: today,
        }
    }

    /// Returns true if no filter is given or the category matches exactly
    pub fn in_category(&self, filter: Option<&str>) -> bool {
        filter.is_none_or(|c| self.category == c)
    }
}
