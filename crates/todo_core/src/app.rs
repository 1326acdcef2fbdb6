//! Todo application state and orchestration.
//!
//! # Responsibility
//! - Own the single authoritative todo list.
//! - Compose capability calls into user-level actions and route page events
//!   to them.
//!
//! # Invariants
//! - A rejected submission never renders or persists; it shows the error
//!   exactly once.
//! - Every successful mutation is followed by exactly one render of the
//!   app's own list.

use crate::model::todo::{Todo, TodoId, TodoValidationError};
use crate::page::{Page, PageError, PageResult, TodoCapabilities};
use crate::render::RenderSurface;
use crate::repo::kv_store::KeyValueStore;
use log::{debug, info, warn};

/// User input delivered by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// New-item form submitted with the input's current text.
    FormSubmitted { text: String },
    /// A rendered row was clicked.
    RowClicked(TodoId),
    ClearClicked,
    SortClicked,
}

/// Result of a form submission.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Rejected(TodoValidationError),
}

impl SubmitOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Application state plus the capabilities it acts through.
pub struct TodoApp<C: TodoCapabilities> {
    todos: Vec<Todo>,
    caps: C,
}

impl<S: KeyValueStore, R: RenderSurface> TodoApp<Page<S, R>> {
    /// Starts an app on a page, loading the persisted list once.
    ///
    /// Does not render; call [`TodoApp::refresh`] to draw the initial rows.
    pub fn load(page: Page<S, R>) -> Self {
        let todos = page.load_todos();
        info!("event=app_load module=app status=ok count={}", todos.len());
        Self::new(todos, page)
    }
}

impl<C: TodoCapabilities> TodoApp<C> {
    pub fn new(todos: Vec<Todo>, caps: C) -> Self {
        Self { todos, caps }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn caps(&self) -> &C {
        &self.caps
    }

    pub fn caps_mut(&mut self) -> &mut C {
        &mut self.caps
    }

    pub fn into_parts(self) -> (Vec<Todo>, C) {
        (self.todos, self.caps)
    }

    /// Validates and appends `text`, then renders; shows the error instead
    /// when validation fails.
    ///
    /// # Errors
    /// - Returns `PageError::Store` when the render cannot persist.
    pub fn create_new_todo(&mut self, text: &str) -> PageResult<SubmitOutcome> {
        match self.caps.add_todo(text, &mut self.todos) {
            Ok(()) => {
                self.caps.create_html(&self.todos)?;
                info!(
                    "event=todo_add module=app status=ok count={}",
                    self.todos.len()
                );
                Ok(SubmitOutcome::Added)
            }
            Err(err) => {
                self.caps.display_error(&err.to_string(), true);
                debug!("event=todo_add module=app status=rejected error_code=too_short");
                Ok(SubmitOutcome::Rejected(err))
            }
        }
    }

    /// Flips the item bound to `id` and renders.
    ///
    /// # Errors
    /// - Returns `PageError::TodoNotFound` when no item carries `id`; nothing
    ///   is mutated or rendered.
    /// - Returns `PageError::Store` when the render cannot persist.
    pub fn toggle_todo(&mut self, id: TodoId) -> PageResult<()> {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id() == id) else {
            warn!("event=todo_toggle module=app status=error error_code=not_found");
            return Err(PageError::TodoNotFound(id));
        };
        self.caps.change_todo(todo);
        self.caps.create_html(&self.todos)?;
        info!("event=todo_toggle module=app status=ok");
        Ok(())
    }

    /// Empties the list and renders.
    pub fn clear_todos(&mut self) -> PageResult<()> {
        let removed = self.todos.len();
        self.caps.remove_all_todos(&mut self.todos);
        self.caps.create_html(&self.todos)?;
        info!("event=todo_clear module=app status=ok removed={removed}");
        Ok(())
    }

    /// Sorts the list by text and renders.
    pub fn sort_todos(&mut self) -> PageResult<()> {
        self.caps.sort_todos(&mut self.todos);
        self.caps.create_html(&self.todos)?;
        info!(
            "event=todo_sort module=app status=ok count={}",
            self.todos.len()
        );
        Ok(())
    }

    /// Renders the current list without changing it.
    pub fn refresh(&mut self) -> PageResult<()> {
        self.caps.create_html(&self.todos)
    }

    /// Routes one page event to its orchestration call.
    pub fn handle(&mut self, event: PageEvent) -> PageResult<Option<SubmitOutcome>> {
        match event {
            PageEvent::FormSubmitted { text } => self.create_new_todo(&text).map(Some),
            PageEvent::RowClicked(id) => self.toggle_todo(id).map(|()| None),
            PageEvent::ClearClicked => self.clear_todos().map(|()| None),
            PageEvent::SortClicked => self.sort_todos().map(|()| None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageEvent, SubmitOutcome, TodoApp};
    use crate::model::todo::{Todo, TodoValidationError};
    use crate::page::{Page, PageError, PageResult, TodoCapabilities};
    use crate::render::memory::MemorySurface;
    use crate::repo::kv_store::MemoryStore;
    use uuid::Uuid;

    /// Records calls; optionally forces the add outcome.
    #[derive(Default)]
    struct Recorder {
        forced_add: Option<Result<(), TodoValidationError>>,
        add_calls: usize,
        change_calls: usize,
        remove_calls: usize,
        renders: Vec<Vec<Todo>>,
        errors: Vec<(String, bool)>,
    }

    impl TodoCapabilities for Recorder {
        fn add_todo(
            &mut self,
            text: &str,
            todos: &mut Vec<Todo>,
        ) -> Result<(), TodoValidationError> {
            self.add_calls += 1;
            match self.forced_add.clone() {
                Some(result) => result,
                None => crate::service::list_ops::add_todo(text, todos),
            }
        }

        fn change_todo(&mut self, todo: &mut Todo) {
            self.change_calls += 1;
            todo.done = !todo.done;
        }

        fn remove_all_todos(&mut self, todos: &mut Vec<Todo>) {
            self.remove_calls += 1;
            todos.clear();
        }

        fn create_html(&mut self, todos: &[Todo]) -> PageResult<()> {
            self.renders.push(todos.to_vec());
            Ok(())
        }

        fn display_error(&mut self, message: &str, show: bool) {
            self.errors.push((message.to_string(), show));
        }
    }

    fn too_short() -> TodoValidationError {
        TodoValidationError::TooShort { len: 2, min: 3 }
    }

    #[test]
    fn accepted_submission_renders_once_and_shows_no_error() {
        let mut app = TodoApp::new(vec![Todo::with_done("hello", true)], Recorder::default());

        let outcome = app.create_new_todo("hello world").unwrap();

        assert_eq!(outcome, SubmitOutcome::Added);
        assert_eq!(app.caps().add_calls, 1);
        assert_eq!(app.caps().renders.len(), 1);
        assert_eq!(app.caps().renders[0].len(), 2);
        assert!(app.caps().errors.is_empty());
    }

    #[test]
    fn rejected_submission_shows_error_once_and_never_renders() {
        let mut app = TodoApp::new(Vec::new(), Recorder::default());

        let outcome = app.create_new_todo("he").unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected(too_short()));
        assert!(app.caps().renders.is_empty());
        assert_eq!(app.caps().errors, [(too_short().to_string(), true)]);
        assert!(app.todos().is_empty());
    }

    #[test]
    fn submission_follows_capability_outcome_not_input() {
        let recorder = Recorder {
            forced_add: Some(Err(too_short())),
            ..Recorder::default()
        };
        let mut app = TodoApp::new(Vec::new(), recorder);

        let outcome = app.create_new_todo("hello world").unwrap();

        assert!(!outcome.is_added());
        assert!(app.caps().renders.is_empty());
        assert_eq!(app.caps().errors.len(), 1);

        let recorder = Recorder {
            forced_add: Some(Ok(())),
            ..Recorder::default()
        };
        let mut app = TodoApp::new(Vec::new(), recorder);

        assert!(app.create_new_todo("he").unwrap().is_added());
        assert_eq!(app.caps().renders.len(), 1);
        assert!(app.caps().errors.is_empty());
    }

    #[test]
    fn toggle_changes_bound_item_and_renders_app_list() {
        let todos = vec![Todo::new("first"), Todo::new("second")];
        let target = todos[1].id();
        let mut app = TodoApp::new(todos, Recorder::default());

        app.toggle_todo(target).unwrap();

        assert_eq!(app.caps().change_calls, 1);
        assert_eq!(app.caps().renders.len(), 1);
        assert_eq!(app.caps().renders[0], app.todos());
        assert!(!app.todos()[0].done);
        assert!(app.todos()[1].done);
    }

    #[test]
    fn toggle_with_unknown_handle_is_rejected_without_render() {
        let mut app = TodoApp::new(vec![Todo::new("first")], Recorder::default());

        let err = app.toggle_todo(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, PageError::TodoNotFound(_)));
        assert_eq!(app.caps().change_calls, 0);
        assert!(app.caps().renders.is_empty());
    }

    #[test]
    fn clear_removes_then_renders_empty_list() {
        let mut app = TodoApp::new(
            vec![Todo::with_done("hello", true), Todo::new("world")],
            Recorder::default(),
        );

        app.clear_todos().unwrap();

        assert_eq!(app.caps().remove_calls, 1);
        assert_eq!(app.caps().renders, [Vec::<Todo>::new()]);
        assert!(app.todos().is_empty());
    }

    #[test]
    fn row_click_toggles_by_handle_after_sort() {
        let page = Page::new(MemoryStore::new(), MemorySurface::new());
        let mut app = TodoApp::load(page);
        for text in ["Bubbles", "Clean", "Acrobatics"] {
            assert!(app.create_new_todo(text).unwrap().is_added());
        }
        let clean = app.caps().surface().click_row(1).unwrap();

        app.handle(PageEvent::SortClicked).unwrap();
        app.handle(PageEvent::RowClicked(clean)).unwrap();

        let rows = app.caps().surface().rows();
        let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, ["Acrobatics", "Bubbles", "Clean"]);
        assert!(rows[2].is_done());
        assert!(!rows[0].is_done() && !rows[1].is_done());
    }

    #[test]
    fn handle_routes_form_submission() {
        let mut app = TodoApp::new(Vec::new(), Recorder::default());

        let outcome = app
            .handle(PageEvent::FormSubmitted {
                text: "buy milk".to_string(),
            })
            .unwrap();

        assert_eq!(outcome, Some(SubmitOutcome::Added));
        assert_eq!(app.todos()[0].text, "buy milk");
        assert_eq!(app.handle(PageEvent::ClearClicked).unwrap(), None);
        assert!(app.todos().is_empty());
    }
}
