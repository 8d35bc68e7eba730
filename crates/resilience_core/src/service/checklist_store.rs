//! Checklist state store.
//!
//! # Responsibility
//! - Maintain the authoritative in-memory state document.
//! - Funnel every legal mutation through one place and write the full
//!   state back to storage after each change (write-through, no batching).
//! - Serialize/deserialize the versioned export document.
//!
//! # Invariants
//! - Missing or corrupt persisted data never fails outward: load falls
//!   back to the catalog-derived default and reports it via
//!   [`LoadOutcome::DefaultFallback`].
//! - A failed import leaves the in-memory state untouched.
//! - A no-op mutation (unknown domain, out-of-range index) skips the save.

use crate::model::state::{ChecklistState, ExportDocument, ProgressSummary};
use crate::repo::state_repo::{RepoError, RepoResult, StateRepository};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How the initial state was obtained.
///
/// User-facing behavior collapses both variants to "ready", but the
/// distinction is kept explicit so the fallback path stays testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted state was present and parsed cleanly.
    Loaded,
    /// Storage was empty or unreadable; state was derived from the catalog.
    DefaultFallback,
}

/// Import failure surfaced to the user.
#[derive(Debug)]
pub enum ImportError {
    /// The supplied bytes are not a parseable export document.
    Parse(serde_json::Error),
    /// The replacement state could not be persisted.
    Storage(RepoError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "import document is not valid JSON: {err}"),
            Self::Storage(err) => write!(f, "imported state could not be saved: {err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<RepoError> for ImportError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Authoritative owner of the checklist state document.
///
/// Storage is an injected collaborator so tests can run against in-memory
/// SQLite; the store itself never touches SQL.
pub struct ChecklistStore<R: StateRepository> {
    repo: R,
    state: ChecklistState,
}

impl<R: StateRepository> ChecklistStore<R> {
    /// Loads the persisted state, falling back to catalog defaults.
    ///
    /// Read and parse failures are swallowed by design: prior state that
    /// cannot be recovered is treated the same as no prior state. The
    /// outcome reports which path was taken.
    pub fn load(repo: R) -> (Self, LoadOutcome) {
        let (state, outcome) = match repo.read_raw() {
            Ok(Some(raw)) => match serde_json::from_str::<ChecklistState>(&raw) {
                Ok(state) => (state, LoadOutcome::Loaded),
                Err(err) => {
                    warn!(
                        "event=state_load module=store status=fallback reason=parse_failed error={err}"
                    );
                    (ChecklistState::default_for_catalog(), LoadOutcome::DefaultFallback)
                }
            },
            Ok(None) => {
                info!("event=state_load module=store status=fallback reason=no_prior_state");
                (ChecklistState::default_for_catalog(), LoadOutcome::DefaultFallback)
            }
            Err(err) => {
                warn!(
                    "event=state_load module=store status=fallback reason=storage_read_failed error={err}"
                );
                (ChecklistState::default_for_catalog(), LoadOutcome::DefaultFallback)
            }
        };

        (Self { repo, state }, outcome)
    }

    /// Read access to the current state document.
    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    /// Derived per-domain and overall completion counts.
    pub fn progress(&self) -> ProgressSummary {
        self.state.progress()
    }

    /// Flips one completion flag and persists the result.
    ///
    /// Returns `Ok(false)` without saving when the domain or index is not
    /// present in the state (reachable after an unvalidated import).
    pub fn toggle(&mut self, domain_id: &str, item_index: usize) -> RepoResult<bool> {
        if !self.state.toggle(domain_id, item_index) {
            warn!(
                "event=toggle module=store status=skipped domain={domain_id} index={item_index}"
            );
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Clears every flag in one domain and persists the result.
    ///
    /// Confirmation prompts are a view concern; callers invoke this only
    /// after the user agreed.
    pub fn reset_domain(&mut self, domain_id: &str) -> RepoResult<bool> {
        if !self.state.reset_domain(domain_id) {
            warn!("event=reset_domain module=store status=skipped domain={domain_id}");
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Rebuilds the all-false catalog state and persists the result.
    ///
    /// This is also the recovery path after an import that does not match
    /// the catalog: the replacement state is derived fresh, not cleared in
    /// place.
    pub fn reset_all(&mut self) -> RepoResult<()> {
        self.state.reset_all();
        self.save()
    }

    /// Serializes the current state as a pretty-printed export document.
    pub fn export_document(&self) -> String {
        let document = ExportDocument::new(self.state.clone());
        serde_json::to_string_pretty(&document).expect("export document always serializes")
    }

    /// Replaces the whole state with an imported document's `data`.
    ///
    /// The envelope `version` is ignored and no structural validation
    /// against the catalog is performed; mismatched domains or lengths are
    /// accepted as-is. On parse failure the prior state is left unchanged.
    pub fn import_document(&mut self, raw: &str) -> Result<(), ImportError> {
        let document: ExportDocument = match serde_json::from_str(raw) {
            Ok(document) => document,
            Err(err) => {
                warn!("event=import module=store status=error reason=parse_failed error={err}");
                return Err(ImportError::Parse(err));
            }
        };

        self.state = document.data;
        self.save()?;
        info!("event=import module=store status=ok");
        Ok(())
    }

    fn save(&self) -> RepoResult<()> {
        let raw =
            serde_json::to_string(&self.state).expect("checklist state always serializes");
        self.repo.write_raw(&raw)
    }
}

/// File name for a downloadable export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("resilience-checklists-{}.json", date.format("%Y-%m-%d"))
}
