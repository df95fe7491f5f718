pub mod destinations;

pub use destinations::{FileDestination, MemoryDestination, ReportDestination};

use crate::errors::IntegrityError;
use std::path::Path;

pub fn ensure_dir(path: &Path) -> Result<(), IntegrityError> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| IntegrityError::ReportIo {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
