//! Core domain logic for the Resilience checklists.
//! This crate is the single source of truth for checklist state invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{catalog_item_total, domain_catalog, find_domain, Domain};
pub use model::state::{
    ChecklistState, DomainProgress, ExportDocument, ProgressSummary, EXPORT_FORMAT_VERSION,
};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, STATE_STORAGE_KEY,
};
pub use service::checklist_store::{export_file_name, ChecklistStore, ImportError, LoadOutcome};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
