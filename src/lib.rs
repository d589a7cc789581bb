//! srs - a personal spaced-repetition scheduler
//!
//! Tasks are recall prompts. Each review moves a task to a later stage and
//! spaces its next review further out, while crowded days are avoided so the
//! daily review list stays short.

pub mod calendar;
pub mod domain;
pub mod error;
pub mod interval;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use error::{Result, SrsError};
