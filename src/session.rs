//! Review session - the entry point the command line drives.
//!
//! Opening a session loads the task store, rebuilds the calendar index and
//! picks the tasks the user may act on today: everything due on or before
//! today, ordered by review date then id, capped at `max_tasks`. Positions in
//! that list are the indices `review` and `forget` take, and they stay fixed
//! for the life of the session.

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::calendar::CalendarIndex;
use crate::domain::{Task, TaskId};
use crate::error::{Result, SrsError};
use crate::scheduler::{RESET_GRADE, Scheduler, SchedulerConfig, apply_grade};
use crate::storage::{StoreBackend, TaskStore};

/// What a review did to the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub task_id: TaskId,
    pub stage: u32,
    /// Interval for the new stage, in days
    pub days: i64,
    pub review_date: NaiveDate,
    /// Set when the task was reset
    pub answer: Option<String>,
}

#[derive(Debug)]
pub struct Session {
    store: TaskStore,
    calendar: CalendarIndex,
    scheduler: Scheduler,
    today: NaiveDate,
    visible: Vec<TaskId>,
}

impl Session {
    /// Open a session for the local calendar day.
    pub fn open(backend: impl StoreBackend + 'static, config: SchedulerConfig) -> Result<Self> {
        Self::open_on(backend, config, Local::now().date_naive())
    }

    /// Open a session as if today were `today`.
    pub fn open_on(backend: impl StoreBackend + 'static, config: SchedulerConfig, today: NaiveDate) -> Result<Self> {
        let store = TaskStore::load(backend)?;
        let calendar = CalendarIndex::build(store.tasks());
        let visible: Vec<TaskId> = calendar.due_through(today).take(config.max_tasks).collect();

        info!(
            "Session for {}: {} tasks stored, {} visible",
            today,
            store.len(),
            visible.len()
        );

        Ok(Self {
            store,
            calendar,
            scheduler: Scheduler::new(config),
            today,
            visible,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Ids of the tasks shown this session, by position.
    pub fn visible(&self) -> &[TaskId] {
        &self.visible
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn calendar(&self) -> &CalendarIndex {
        &self.calendar
    }

    /// The visible task at `index`.
    pub fn task(&self, index: usize) -> Result<&Task> {
        let id = self.resolve(index)?;
        self.store.get(id).ok_or(SrsError::TaskNotFound(id))
    }

    /// Add a new task and schedule its first review.
    ///
    /// The task starts out due today and is scheduled once straight away, so
    /// its first review is `interval_for(stage)` days from today.
    pub fn remember(&mut self, category: &str, prompt: &str, answer: &str, stage: u32) -> Result<TaskId> {
        let id = self.store.generate_id()?;
        let mut task = Task::new(id, category, prompt, answer, stage, self.today);
        info!("Remembering task {} in '{}'", id, category);
        self.scheduler.schedule(&mut task, &mut self.store, &mut self.calendar)?;
        Ok(id)
    }

    /// Grade the visible task at `index` and reschedule it.
    pub fn review(&mut self, index: usize, grade: i32) -> Result<ReviewOutcome> {
        let id = self.resolve(index)?;
        let mut task = self.store.get(id).cloned().ok_or(SrsError::TaskNotFound(id))?;

        let previous_stage = task.stage;
        task.stage = apply_grade(task.stage, grade);
        let answer = (grade == RESET_GRADE).then(|| task.answer.clone());
        info!(
            "Reviewing task {} with grade {}: stage {} -> {}",
            id, grade, previous_stage, task.stage
        );

        let days = self.scheduler.schedule(&mut task, &mut self.store, &mut self.calendar)?;

        Ok(ReviewOutcome {
            task_id: id,
            stage: task.stage,
            days,
            review_date: task.review_date,
            answer,
        })
    }

    /// Delete the visible task at `index`. Its id is never reused.
    pub fn forget(&mut self, index: usize) -> Result<Task> {
        let id = self.resolve(index)?;
        let task = self.store.remove(id)?;
        self.calendar.remove(id, task.review_date);
        self.store.save()?;
        info!("Forgot task {} ('{}')", id, task.prompt);
        Ok(task)
    }

    /// `(index, prompt)` for visible tasks, optionally limited to a category.
    ///
    /// Indices are session positions, so filtering leaves gaps rather than
    /// renumbering. Forgotten tasks are skipped.
    pub fn list_tasks(&self, category: Option<&str>) -> Vec<(usize, &str)> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(index, id)| self.store.get(*id).map(|task| (index, task)))
            .filter(|(_, task)| task.in_category(category))
            .map(|(index, task)| (index, task.prompt.as_str()))
            .collect()
    }

    fn resolve(&self, index: usize) -> Result<TaskId> {
        self.visible.get(index).copied().ok_or_else(|| {
            warn!("No task at index {} ({} visible)", index, self.visible.len());
            SrsError::SessionIndexOutOfRange {
                index,
                visible: self.visible.len(),
            }
        })
    }
}
