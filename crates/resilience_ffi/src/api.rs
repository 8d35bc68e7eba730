//! FFI use-case API for the checklist UI host.
//!
//! # Responsibility
//! - Expose the view-facing checklist surface to Dart via FRB: catalog
//!   read, progress read, toggle/reset mutations, export/import.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Confirmation prompts for resets stay in the UI; these calls assume
//!   the user already agreed.

use chrono::Local;
use resilience_core::db::open_db;
use resilience_core::{
    core_version as core_version_inner, export_file_name, find_domain,
    init_logging as init_logging_inner, ping as ping_inner, ChecklistStore,
    SqliteStateRepository,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;

const CHECKLIST_DB_FILE_NAME: &str = "resilience_checklists.sqlite3";
static CHECKLIST_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One domain row for the navigation sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSummary {
    /// Stable domain id used for follow-up calls.
    pub id: String,
    /// Human-readable domain title.
    pub title: String,
    /// Completed item count.
    pub done: u32,
    /// Total item count carried by the state entry.
    pub total: u32,
    /// Completion percentage rounded to the nearest integer.
    pub pct: u8,
}

/// Catalog overview envelope with overall progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistOverview {
    /// Per-domain summaries in catalog display order.
    pub domains: Vec<DomainSummary>,
    /// Overall completion percentage.
    pub overall_pct: u8,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// One checklist line within a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainItem {
    /// Positional item identity, valid for `toggle_item`.
    pub index: u32,
    /// Item label from the static catalog.
    pub label: String,
    /// Current completion flag.
    pub checked: bool,
}

/// Item listing envelope for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainItemsResponse {
    /// Items in catalog order (empty on failure or unknown domain).
    pub items: Vec<DomainItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistActionResponse {
    /// Whether the operation mutated and persisted state.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ChecklistActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Export envelope carrying the downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    /// Whether the export content is valid.
    pub ok: bool,
    /// Suggested download file name (`resilience-checklists-YYYY-MM-DD.json`).
    pub file_name: String,
    /// Pretty-printed export document content.
    pub content: String,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Lists all domains with per-domain and overall progress.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; on storage failure returns an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn list_domains() -> ChecklistOverview {
    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => {
            return ChecklistOverview {
                domains: Vec::new(),
                overall_pct: 0,
                message,
            };
        }
    };

    let (store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    let progress = store.progress();
    let domains = progress
        .totals
        .iter()
        .map(|domain| DomainSummary {
            id: domain.id.to_string(),
            title: domain.title.to_string(),
            done: domain.done as u32,
            total: domain.total as u32,
            pct: domain.percent(),
        })
        .collect();

    ChecklistOverview {
        domains,
        overall_pct: progress.percent(),
        message: String::new(),
    }
}

/// Lists the items of one domain with current completion flags.
///
/// Labels come from the static catalog; flags come from the state entry
/// and default to unchecked where the entry is shorter than the catalog.
#[flutter_rust_bridge::frb(sync)]
pub fn domain_items(domain_id: String) -> DomainItemsResponse {
    let Some(domain) = find_domain(&domain_id) else {
        return DomainItemsResponse {
            items: Vec::new(),
            message: format!("Unknown domain `{domain_id}`."),
        };
    };

    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => {
            return DomainItemsResponse {
                items: Vec::new(),
                message,
            };
        }
    };

    let (store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    let flags = store.state().flags(domain.id).unwrap_or(&[]);
    let items = domain
        .items
        .iter()
        .enumerate()
        .map(|(index, label)| DomainItem {
            index: index as u32,
            label: (*label).to_string(),
            checked: flags.get(index).copied().unwrap_or(false),
        })
        .collect();

    DomainItemsResponse {
        items,
        message: String::new(),
    }
}

/// Flips one completion flag.
///
/// # FFI contract
/// - Sync call, DB-backed execution; persists on success.
/// - Never panics; unknown domain/index reports `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_item(domain_id: String, item_index: u32) -> ChecklistActionResponse {
    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => return ChecklistActionResponse::failure(message),
    };

    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    match store.toggle(&domain_id, item_index as usize) {
        Ok(true) => ChecklistActionResponse::success("Item toggled."),
        Ok(false) => ChecklistActionResponse::failure(format!(
            "No item at `{domain_id}`[{item_index}]; nothing toggled."
        )),
        Err(err) => ChecklistActionResponse::failure(format!("toggle_item failed: {err}")),
    }
}

/// Clears every flag in one domain.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_domain(domain_id: String) -> ChecklistActionResponse {
    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => return ChecklistActionResponse::failure(message),
    };

    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    match store.reset_domain(&domain_id) {
        Ok(true) => ChecklistActionResponse::success("Domain reset."),
        Ok(false) => {
            ChecklistActionResponse::failure(format!("Unknown domain `{domain_id}`."))
        }
        Err(err) => ChecklistActionResponse::failure(format!("reset_domain failed: {err}")),
    }
}

/// Clears every flag in every domain.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_all() -> ChecklistActionResponse {
    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => return ChecklistActionResponse::failure(message),
    };

    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    match store.reset_all() {
        Ok(()) => ChecklistActionResponse::success("All domains reset."),
        Err(err) => ChecklistActionResponse::failure(format!("reset_all failed: {err}")),
    }
}

/// Produces the downloadable export document and its file name.
#[flutter_rust_bridge::frb(sync)]
pub fn export_checklists() -> ExportResponse {
    let file_name = export_file_name(Local::now().date_naive());
    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => {
            return ExportResponse {
                ok: false,
                file_name,
                content: String::new(),
                message,
            };
        }
    };

    let (store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    ExportResponse {
        ok: true,
        file_name,
        content: store.export_document(),
        message: String::new(),
    }
}

/// Replaces the whole state with an imported document.
///
/// # FFI contract
/// - Sync call; the UI host reads the file bytes and passes UTF-8 content.
/// - Parse failure leaves existing state unchanged and reports `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn import_checklists(content: String) -> ChecklistActionResponse {
    let conn = match open_checklist_db() {
        Ok(conn) => conn,
        Err(message) => return ChecklistActionResponse::failure(message),
    };

    let (mut store, _) = ChecklistStore::load(SqliteStateRepository::new(&conn));
    match store.import_document(&content) {
        Ok(()) => ChecklistActionResponse::success("Checklists imported."),
        Err(err) => ChecklistActionResponse::failure(format!("Import failed: {err}")),
    }
}

fn open_checklist_db() -> Result<Connection, String> {
    let db_path = resolve_checklist_db_path();
    open_db(&db_path).map_err(|err| format!("checklist DB open failed: {err}"))
}

fn resolve_checklist_db_path() -> PathBuf {
    CHECKLIST_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("RESILIENCE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CHECKLIST_DB_FILE_NAME)
        })
        .clone()
}
