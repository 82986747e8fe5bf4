//! Finance profile repository
//!
//! Holds the single in-memory profile and persists it to `profile.json`.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::FinflowError;
use crate::models::FinanceProfile;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the finance profile
pub struct ProfileRepository {
    path: PathBuf,
    profile: RwLock<FinanceProfile>,
}

impl ProfileRepository {
    /// Create a new repository holding an empty profile
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            profile: RwLock::new(FinanceProfile::default()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the profile from disk, falling back to an empty profile
    pub fn load(&self) -> Result<(), FinflowError> {
        let loaded: FinanceProfile = read_json(&self.path)?;

        debug!(
            income_sources = loaded.income_sources.len(),
            expenses = loaded.expenses.len(),
            "loaded profile"
        );

        let mut profile = self
            .profile
            .write()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *profile = loaded;

        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> Result<(), FinflowError> {
        let profile = self
            .profile
            .read()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*profile)
    }

    /// Snapshot of the current profile
    pub fn get(&self) -> Result<FinanceProfile, FinflowError> {
        let profile = self
            .profile
            .read()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(profile.clone())
    }

    /// Apply a change to the profile in place
    pub fn update<F, R>(&self, change: F) -> Result<R, FinflowError>
    where
        F: FnOnce(&mut FinanceProfile) -> R,
    {
        let mut profile = self
            .profile
            .write()
            .map_err(|e| FinflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(change(&mut *profile))
    }

    /// Replace the whole profile
    pub fn replace(&self, replacement: FinanceProfile) -> Result<(), FinflowError> {
        self.update(|profile| *profile = replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStrategy, Expense, Money};
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profile.json"));

        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), FinanceProfile::default());
    }

    #[test]
    fn test_update_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profile.json"));

        let count = repo
            .update(|profile| {
                profile.add_expense(Expense::new("Rent", Money::from_units(900), 1));
                profile.expenses.len()
            })
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(repo.get().unwrap().expenses[0].name, "Rent");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");

        {
            let repo = ProfileRepository::new(path.clone());
            repo.replace(FinanceProfile::with_strategy(BudgetStrategy::SafeDebt))
                .unwrap();
            repo.update(|profile| profile.balance = Money::from_units(42))
                .unwrap();
            repo.save().unwrap();
        }

        {
            let repo = ProfileRepository::new(path);
            repo.load().unwrap();
            let profile = repo.get().unwrap();
            assert_eq!(profile.target_strategy, BudgetStrategy::SafeDebt);
            assert_eq!(profile.balance, Money::from_units(42));
        }
    }
}
