//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the raw-state storage contract injected into the store.
//! - Isolate SQLite key-value details from store orchestration.
//!
//! # Invariants
//! - The persisted value is always the full serialized state under one
//!   fixed key; there are no partial writes.

pub mod state_repo;
