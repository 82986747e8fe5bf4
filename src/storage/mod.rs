//! Storage layer for FinFlow
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod profile;

pub use file_io::{read_json, write_json_atomic};
pub use profile::ProfileRepository;

use crate::config::paths::FinflowPaths;
use crate::error::FinflowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinflowPaths,
    pub profile: ProfileRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinflowPaths) -> Result<Self, FinflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            profile: ProfileRepository::new(paths.profile_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinflowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinflowError> {
        self.profile.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinflowError> {
        self.profile.save()
    }

    /// Check if a profile has been written yet
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_initializes() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage.save_all().unwrap();
        assert!(storage.is_initialized());
    }
}
