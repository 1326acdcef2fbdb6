//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the todo page actions to Dart via FRB.
//! - Return a full page snapshot after every call so the UI can redraw.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calls are serialized; each one loads, acts on and persists the list
//!   before the next starts.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use todo_core::config::resolve_db_path;
use todo_core::db::open_db;
use todo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    MemorySurface, Page, PageEvent, PageResult, SqliteStore, SubmitOutcome, TodoApp, TodoId,
};

type FfiApp<'conn> = TodoApp<Page<SqliteStore<'conn>, MemorySurface>>;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static PAGE_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
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
/// Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRowView {
    pub text: String,
    pub done: bool,
    /// Space-separated class markers (`todo__text`, `todo__text--done`).
    pub class_name: String,
}

/// Page snapshot returned by every todo call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPageResponse {
    /// False only for storage or lookup failures; rejected text is `ok`
    /// with `error_shown = true`.
    pub ok: bool,
    pub message: String,
    /// Whether this call re-rendered the list; when false the UI keeps
    /// the rows it already shows.
    pub rendered: bool,
    /// Rows in list order, valid only when `rendered` is true.
    pub rows: Vec<TodoRowView>,
    pub error_text: String,
    pub error_shown: bool,
}

/// Loads the persisted list and renders it.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_load_page() -> TodoPageResponse {
    load_page_at(db_path())
}

/// Submits the new-todo form with `text`.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_submit(text: String) -> TodoPageResponse {
    submit_at(db_path(), text)
}

/// Toggles the row at 0-based `row_index` of the persisted order.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_toggle(row_index: u32) -> TodoPageResponse {
    toggle_at(db_path(), row_index)
}

/// Removes every todo.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_clear() -> TodoPageResponse {
    clear_at(db_path())
}

/// Sorts todos by text.
#[flutter_rust_bridge::frb(sync)]
pub fn todo_sort() -> TodoPageResponse {
    sort_at(db_path())
}

fn db_path() -> &'static Path {
    DB_PATH.get_or_init(resolve_db_path)
}

fn load_page_at(path: &Path) -> TodoPageResponse {
    with_app(path, "todo_load_page", |app| app.refresh().map(|()| None))
}

fn submit_at(path: &Path, text: String) -> TodoPageResponse {
    with_app(path, "todo_submit", |app| {
        app.handle(PageEvent::FormSubmitted { text })
    })
}

fn toggle_at(path: &Path, row_index: u32) -> TodoPageResponse {
    with_app(path, "todo_toggle", |app| {
        // Unknown positions map to a nil handle, which the app rejects.
        let id = usize::try_from(row_index)
            .ok()
            .and_then(|index| app.todos().get(index))
            .map_or(TodoId::nil(), |todo| todo.id());
        app.handle(PageEvent::RowClicked(id))
    })
}

fn clear_at(path: &Path) -> TodoPageResponse {
    with_app(path, "todo_clear", |app| app.handle(PageEvent::ClearClicked))
}

fn sort_at(path: &Path) -> TodoPageResponse {
    with_app(path, "todo_sort", |app| app.handle(PageEvent::SortClicked))
}

fn with_app(
    path: &Path,
    call: &str,
    f: impl FnOnce(&mut FfiApp<'_>) -> PageResult<Option<SubmitOutcome>>,
) -> TodoPageResponse {
    // Poisoning is harmless here: every call reloads the list from disk.
    let _guard = PAGE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let conn = match open_db(path) {
        Ok(conn) => conn,
        Err(err) => return TodoPageResponse::failure(format!("{call} failed: {err}")),
    };
    let mut app = TodoApp::load(Page::new(SqliteStore::new(&conn), MemorySurface::new()));

    match f(&mut app) {
        Ok(Some(SubmitOutcome::Rejected(err))) => {
            log::debug!("event=ffi_call module=ffi call={call} status=rejected");
            TodoPageResponse::snapshot(app.caps().surface(), err.to_string())
        }
        Ok(_) => TodoPageResponse::snapshot(app.caps().surface(), "OK.".to_string()),
        Err(err) => {
            log::warn!("event=ffi_call module=ffi call={call} status=error error={err}");
            TodoPageResponse::failure(format!("{call} failed: {err}"))
        }
    }
}

impl TodoPageResponse {
    fn snapshot(surface: &MemorySurface, message: String) -> Self {
        Self {
            ok: true,
            message,
            rendered: surface.render_count() > 0,
            rows: surface
                .rows()
                .iter()
                .map(|row| TodoRowView {
                    text: row.text.clone(),
                    done: row.is_done(),
                    class_name: row.classes.join(" "),
                })
                .collect(),
            error_text: surface.error_text().to_string(),
            error_shown: surface.is_error_shown(),
        }
    }

    fn failure(message: String) -> Self {
        Self {
            ok: false,
            message,
            rendered: false,
            rows: Vec::new(),
            error_text: String::new(),
            error_shown: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        clear_at, core_version, init_logging, load_page_at, ping, sort_at, submit_at, toggle_at,
    };
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn temp_db() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo_ffi.sqlite3");
        (dir, path)
    }

    fn texts(response: &super::TodoPageResponse) -> Vec<&str> {
        response.rows.iter().map(|row| row.text.as_str()).collect()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_relative_dir_and_unknown_level() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn fresh_database_loads_empty_page() {
        let (_dir, path) = temp_db();
        let response = load_page_at(&path);
        assert!(response.ok, "{}", response.message);
        assert!(response.rendered);
        assert!(response.rows.is_empty());
        assert!(!response.error_shown);
    }

    #[test]
    fn submit_renders_rows_and_persists() {
        let (_dir, path) = temp_db();

        let response = submit_at(&path, "water plants".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(texts(&response), ["water plants"]);
        assert_eq!(response.rows[0].class_name, "todo__text");

        let reloaded = load_page_at(&path);
        assert_eq!(texts(&reloaded), ["water plants"]);
    }

    #[test]
    fn short_submit_shows_error_without_rendering() {
        let (_dir, path) = temp_db();

        let response = submit_at(&path, "ab".to_string());
        assert!(response.ok);
        assert!(response.error_shown);
        assert_eq!(response.error_text, todo_core::TODO_TOO_SHORT_MESSAGE);
        assert!(!response.rendered);
        assert!(load_page_at(&path).rows.is_empty());
    }

    #[test]
    fn toggle_sort_and_clear_round_trip() {
        let (_dir, path) = temp_db();
        for text in ["Bubbles", "Clean", "Acrobatics"] {
            assert!(submit_at(&path, text.to_string()).ok);
        }

        let toggled = toggle_at(&path, 1);
        assert!(toggled.ok, "{}", toggled.message);
        assert!(toggled.rows[1].done);
        assert_eq!(toggled.rows[1].class_name, "todo__text--done todo__text");

        let sorted = sort_at(&path);
        assert_eq!(texts(&sorted), ["Acrobatics", "Bubbles", "Clean"]);
        assert!(sorted.rows[2].done);

        let cleared = clear_at(&path);
        assert!(cleared.ok);
        assert!(cleared.rows.is_empty());
        assert!(load_page_at(&path).rows.is_empty());
    }

    #[test]
    fn toggle_out_of_range_reports_failure() {
        let (_dir, path) = temp_db();
        let response = toggle_at(&path, 7);
        assert!(!response.ok);
        assert!(response.message.contains("todo not found"));
    }
}
