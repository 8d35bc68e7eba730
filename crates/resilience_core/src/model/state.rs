//! Checklist state document and derived progress.
//!
//! # Responsibility
//! - Define the persisted completion-flag document and its mutation helpers.
//! - Define the versioned export/import envelope.
//! - Derive per-domain and overall completion counts for views.
//!
//! # Invariants
//! - A freshly derived state has one all-false entry per catalog domain,
//!   positionally aligned with that domain's item labels.
//! - Mutation helpers never panic on a domain/index the state does not
//!   carry; they report a no-op instead. Imported documents are accepted
//!   without catalog validation, so misaligned entries are reachable.

use crate::model::catalog::{domain_catalog, Domain};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Export/import envelope format version. Written on export, ignored on
/// import (kept for forward compatibility only).
pub const EXPORT_FORMAT_VERSION: u32 = 1;

/// The full set of completion flags, keyed by domain id.
///
/// Serializes as a plain JSON object (`{"finances": [false, ...], ...}`);
/// this is exactly the shape written to persisted storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    entries: BTreeMap<String, Vec<bool>>,
}

impl ChecklistState {
    /// Derives the first-run state: one all-false entry per catalog domain.
    pub fn default_for_catalog() -> Self {
        let entries = domain_catalog()
            .iter()
            .map(|domain| (domain.id.to_string(), vec![false; domain.items.len()]))
            .collect();
        Self { entries }
    }

    /// Returns the completion flags for one domain, if present.
    pub fn flags(&self, domain_id: &str) -> Option<&[bool]> {
        self.entries.get(domain_id).map(Vec::as_slice)
    }

    /// Flips the flag at `item_index` within `domain_id`.
    ///
    /// Returns `true` when a flag was flipped, `false` when the domain is
    /// missing or the index is out of range (no-op).
    pub fn toggle(&mut self, domain_id: &str, item_index: usize) -> bool {
        match self
            .entries
            .get_mut(domain_id)
            .and_then(|flags| flags.get_mut(item_index))
        {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }

    /// Clears every flag in one domain.
    ///
    /// Returns `false` when the domain is not present in the state.
    pub fn reset_domain(&mut self, domain_id: &str) -> bool {
        match self.entries.get_mut(domain_id) {
            Some(flags) => {
                flags.iter_mut().for_each(|flag| *flag = false);
                true
            }
            None => false,
        }
    }

    /// Rebuilds the all-false state for every catalog domain.
    ///
    /// Unlike [`reset_domain`](Self::reset_domain), this does not clear the
    /// existing entries in place: it derives a fresh document from the
    /// catalog, which restores catalog alignment after an unvalidated
    /// import dropped or shortened entries.
    pub fn reset_all(&mut self) {
        *self = Self::default_for_catalog();
    }

    /// Computes per-domain and overall completion counts in catalog order.
    ///
    /// Counts reflect the state entries, not the catalog item labels: after
    /// an unvalidated import a domain's total may differ from its label
    /// count, and a domain absent from the state reports `0/0`.
    pub fn progress(&self) -> ProgressSummary {
        let totals: Vec<DomainProgress> = domain_catalog()
            .iter()
            .map(|domain| self.domain_progress(domain))
            .collect();
        let done = totals.iter().map(|progress| progress.done).sum();
        let total = totals.iter().map(|progress| progress.total).sum();
        ProgressSummary {
            totals,
            done,
            total,
        }
    }

    fn domain_progress(&self, domain: &Domain) -> DomainProgress {
        let flags = self.flags(domain.id).unwrap_or(&[]);
        DomainProgress {
            id: domain.id,
            title: domain.title,
            done: flags.iter().filter(|flag| **flag).count(),
            total: flags.len(),
        }
    }
}

/// Completion counts for one catalog domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainProgress {
    pub id: &'static str,
    pub title: &'static str,
    pub done: usize,
    pub total: usize,
}

impl DomainProgress {
    /// Completion percentage rounded to the nearest integer.
    pub fn percent(&self) -> u8 {
        percent_of(self.done, self.total)
    }
}

/// Completion counts across the whole catalog, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    pub totals: Vec<DomainProgress>,
    pub done: usize,
    pub total: usize,
}

impl ProgressSummary {
    /// Overall completion percentage rounded to the nearest integer.
    pub fn percent(&self) -> u8 {
        percent_of(self.done, self.total)
    }
}

fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}

/// Versioned envelope used for the downloadable export file.
///
/// Persisted storage holds the bare [`ChecklistState`]; only exported files
/// carry this wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Always [`EXPORT_FORMAT_VERSION`] on export; tolerated when absent
    /// on import and never checked.
    #[serde(default)]
    pub version: u32,
    pub data: ChecklistState,
}

impl ExportDocument {
    /// Wraps a state snapshot with the current format version.
    pub fn new(data: ChecklistState) -> Self {
        Self {
            version: EXPORT_FORMAT_VERSION,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChecklistState, ExportDocument, EXPORT_FORMAT_VERSION};
    use crate::model::catalog::domain_catalog;

    #[test]
    fn default_state_covers_catalog_with_all_false() {
        let state = ChecklistState::default_for_catalog();
        for domain in domain_catalog() {
            let flags = state.flags(domain.id).unwrap();
            assert_eq!(flags.len(), domain.items.len());
            assert!(flags.iter().all(|flag| !flag));
        }
    }

    #[test]
    fn toggle_flips_exactly_one_flag_and_is_an_involution() {
        let baseline = ChecklistState::default_for_catalog();
        let mut state = baseline.clone();

        assert!(state.toggle("finances", 2));
        assert_eq!(state.flags("finances").unwrap(), &[false, false, true, false]);
        for domain in domain_catalog().iter().filter(|domain| domain.id != "finances") {
            assert_eq!(state.flags(domain.id), baseline.flags(domain.id));
        }

        assert!(state.toggle("finances", 2));
        assert_eq!(state, baseline);
    }

    #[test]
    fn toggle_on_unknown_domain_or_index_is_a_noop() {
        let mut state = ChecklistState::default_for_catalog();
        let baseline = state.clone();
        assert!(!state.toggle("unknown", 0));
        assert!(!state.toggle("finances", 99));
        assert_eq!(state, baseline);
    }

    #[test]
    fn reset_domain_clears_only_that_domain() {
        let mut state = ChecklistState::default_for_catalog();
        state.toggle("finances", 0);
        state.toggle("finances", 2);
        state.toggle("travel", 1);

        assert!(state.reset_domain("finances"));
        assert_eq!(
            state.flags("finances").unwrap(),
            &[false, false, false, false]
        );
        assert_eq!(state.flags("travel").unwrap(), &[false, true, false, false]);
        assert!(!state.reset_domain("unknown"));
    }

    #[test]
    fn reset_all_clears_every_domain() {
        let mut state = ChecklistState::default_for_catalog();
        state.toggle("finances", 1);
        state.toggle("pets", 3);
        state.reset_all();
        assert_eq!(state, ChecklistState::default_for_catalog());
    }

    #[test]
    fn reset_all_restores_catalog_shape_after_mismatched_import() {
        let document: ExportDocument =
            serde_json::from_str(r#"{"version":1,"data":{"finances":[true]}}"#).unwrap();
        let mut state = document.data;
        assert!(state.flags("travel").is_none());

        state.reset_all();

        assert_eq!(state, ChecklistState::default_for_catalog());
        assert_eq!(state.flags("finances").unwrap().len(), 4);
    }

    #[test]
    fn progress_counts_done_items_and_rounds_percent() {
        let mut state = ChecklistState::default_for_catalog();
        let empty = state.progress();
        assert_eq!(empty.done, 0);
        assert_eq!(empty.percent(), 0);

        state.toggle("finances", 0);
        state.toggle("finances", 1);
        let progress = state.progress();
        let finances = progress
            .totals
            .iter()
            .find(|domain| domain.id == "finances")
            .unwrap();
        assert_eq!(finances.done, 2);
        assert_eq!(finances.total, 4);
        assert_eq!(finances.percent(), 50);
        assert_eq!(progress.done, 2);
    }

    #[test]
    fn progress_totals_follow_catalog_order() {
        let state = ChecklistState::default_for_catalog();
        let ids: Vec<_> = state
            .progress()
            .totals
            .iter()
            .map(|domain| domain.id)
            .collect();
        let catalog_ids: Vec<_> = domain_catalog().iter().map(|domain| domain.id).collect();
        assert_eq!(ids, catalog_ids);
    }

    #[test]
    fn export_document_serializes_with_version_tag() {
        let document = ExportDocument::new(ChecklistState::default_for_catalog());
        assert_eq!(document.version, EXPORT_FORMAT_VERSION);
        let raw = serde_json::to_string(&document).unwrap();
        assert!(raw.contains("\"version\":1"));
        assert!(raw.contains("\"finances\""));
    }

    #[test]
    fn export_document_import_tolerates_missing_version() {
        let document: ExportDocument =
            serde_json::from_str(r#"{"data":{"finances":[true,false]}}"#).unwrap();
        assert_eq!(document.version, 0);
        assert_eq!(document.data.flags("finances").unwrap(), &[true, false]);
    }
}
