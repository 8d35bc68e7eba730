//! Store orchestration over model and repository layers.
//!
//! # Responsibility
//! - Own the authoritative in-memory checklist state.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod checklist_store;
