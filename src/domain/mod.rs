//! Domain types for srs
//!
//! - Task: a recall prompt with its stage and next review date
//! - TaskId: sequential, never reused identifier

pub mod task;

pub use task::{Task, TaskId};
