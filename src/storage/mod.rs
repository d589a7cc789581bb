//! Storage layer for srs - the task store and its persistence backends.
//!
//! The whole task set is materialized in memory. Every mutation is written
//! straight back to the backend as one JSON document:
//!
//! ```json
//! {"tasks": {"0": {"id": 0, "category": "lang", ...}}, "counter": 1}
//! ```

mod file;
mod memory;
mod traits;

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskId};
use crate::error::{Result, SrsError};

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use traits::StoreBackend;

/// The persisted document. Both keys are absent on a fresh store.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoreRecord {
    tasks: BTreeMap<TaskId, Task>,
    counter: TaskId,
}

/// Owns every task, keyed by id, plus the id counter.
pub struct TaskStore {
    backend: Box<dyn StoreBackend>,
    tasks: BTreeMap<TaskId, Task>,
    counter: TaskId,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("backend", &self.backend.describe())
            .field("tasks", &self.tasks.len())
            .field("counter", &self.counter)
            .finish()
    }
}

impl TaskStore {
    /// Load the store from `backend`.
    ///
    /// A missing or blank document is a fresh start. Anything else that does
    /// not parse is [`SrsError::StoreMalformed`].
    pub fn load(backend: impl StoreBackend + 'static) -> Result<Self> {
        let backend: Box<dyn StoreBackend> = Box::new(backend);
        let record = match backend.read()? {
            Some(contents) if !contents.trim().is_empty() => parse_record(&contents)?,
            _ => {
                info!("No tasks at {}, starting empty", backend.describe());
                StoreRecord::default()
            }
        };

        debug!(
            "Loaded {} tasks (counter {}) from {}",
            record.tasks.len(),
            record.counter,
            backend.describe()
        );

        Ok(Self {
            backend,
            tasks: record.tasks,
            counter: record.counter,
        })
    }

    /// Write every task and the counter back to the backend.
    pub fn save(&self) -> Result<()> {
        let record = StoreRecordRef {
            tasks: &self.tasks,
            counter: self.counter,
        };
        let json = serde_json::to_string(&record)?;
        self.backend.write(&json)?;
        debug!("Saved {} tasks to {}", self.tasks.len(), self.backend.describe());
        Ok(())
    }

    /// Hand out the next id and persist the bumped counter right away.
    pub fn generate_id(&mut self) -> Result<TaskId> {
        let id = self.counter;
        self.counter = id.checked_add(1).ok_or(SrsError::IdsExhausted(id))?;
        self.save()?;
        Ok(id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Insert or overwrite a task by id. Does not persist.
    pub fn put(&mut self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    /// Remove a task by id. Does not persist.
    pub fn remove(&mut self, id: TaskId) -> Result<Task> {
        self.tasks.remove(&id).ok_or(SrsError::TaskNotFound(id))
    }

    /// All tasks in ascending id order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The id the next call to [`generate_id`](Self::generate_id) returns.
    pub fn counter(&self) -> TaskId {
        self.counter
    }
}

/// Borrowing twin of [`StoreRecord`] so saving doesn't clone the task map.
#[derive(Serialize)]
struct StoreRecordRef<'a> {
    tasks: &'a BTreeMap<TaskId, Task>,
    counter: TaskId,
}

fn parse_record(contents: &str) -> Result<StoreRecord> {
    let mut record: StoreRecord =
        serde_json::from_str(contents).map_err(|e| SrsError::StoreMalformed(e.to_string()))?;

    if let Some((key, task)) = record.tasks.iter().find(|(key, task)| **key != task.id) {
        return Err(SrsError::StoreMalformed(format!(
            "task stored under key {} has id {}",
            key, task.id
        )));
    }

    // ids must never be handed out twice
    if let Some(&max_id) = record.tasks.keys().next_back()
        && record.counter <= max_id
    {
        warn!("Counter {} is not above highest task id {}, bumping", record.counter, max_id);
        record.counter = max_id.checked_add(1).ok_or(SrsError::IdsExhausted(max_id))?;
    }

    Ok(record)
}
