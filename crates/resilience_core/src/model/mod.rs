//! Domain model for the resilience checklists.
//!
//! # Responsibility
//! - Define the static domain catalog shared by every view projection.
//! - Define the mutable checklist state document and its derived progress.
//!
//! # Invariants
//! - The catalog is fixed at build time; ids and item counts never change
//!   at runtime.
//! - Checklist state indices are positional against the catalog item order.

pub mod catalog;
pub mod state;
