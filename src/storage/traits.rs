//! Storage backend trait.

use crate::error::Result;

/// A single-record key-value store holding the serialized task set.
///
/// Backends are read once at session start and rewritten after every
/// mutation. There is no locking: two processes sharing a backend can
/// overwrite each other's changes.
pub trait StoreBackend: Send + Sync {
    /// Read the stored document. `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored document. Readers never see a partial write.
    fn write(&self, contents: &str) -> Result<()>;

    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;
}
