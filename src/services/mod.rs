//! Service layer for FinFlow
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, the allocation engine, statement import and insights.

pub mod allocation;
pub mod categorize;
pub mod import;
pub mod insights;
pub mod profile;

pub use allocation::AllocationEngine;
pub use categorize::{Categorizer, CategoryRule};
pub use import::{ImportService, RowError, StatementColumns, StatementImport};
pub use insights::StatementInsights;
pub use profile::ProfileService;
