//! In-memory backend, shared between clones.

use std::sync::{Arc, RwLock};

use super::traits::StoreBackend;
use crate::error::{Result, SrsError};

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    contents: Arc<RwLock<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with an existing document.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }
}

impl StoreBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        let guard = self
            .contents
            .read()
            .map_err(|e| SrsError::Io(std::io::Error::other(e.to_string())))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut guard = self
            .contents
            .write()
            .map_err(|e| SrsError::Io(std::io::Error::other(e.to_string())))?;
        *guard = Some(contents.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
