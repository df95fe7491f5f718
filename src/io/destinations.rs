//! Output destination port for the report emitter.
//!
//! All filesystem effects sit behind this trait, keeping the scoring and
//! validation core pure and letting tests capture emitter output in
//! memory.

use crate::errors::IntegrityError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// A sink the report emitter writes a rendered document into.
pub trait ReportDestination {
    fn write_str(&self, content: &str) -> Result<(), IntegrityError>;

    /// Description of the destination for logs and error messages.
    fn description(&self) -> String;
}

/// Writes a rendered document to one file.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<(), IntegrityError> {
        std::fs::write(&self.path, content).map_err(|source| IntegrityError::ReportIo {
            path: self.path.clone(),
            source,
        })
    }

    fn description(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Captures emitter output in a buffer for inspection under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl ReportDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<(), IntegrityError> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}
