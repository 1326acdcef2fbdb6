//! Bridge between the todo list and a key-value store.
//!
//! # Invariants
//! - Stored form is a JSON array of `{"text", "done"}` objects.
//! - Loading never fails; absent, corrupt, or unreadable data yields an
//!   empty list.

use crate::model::todo::Todo;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::{error, info, warn};

/// Fixed key the list is stored under.
pub const TODOS_STORAGE_KEY: &str = "todos";

/// Loads the persisted list, defaulting to empty.
pub fn load_todos(store: &impl KeyValueStore) -> Vec<Todo> {
    let raw = match store.get_item(TODOS_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=todos_load module=repo status=ok source=empty count=0");
            return Vec::new();
        }
        Err(err) => {
            error!("event=todos_load module=repo status=error error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Todo>>(&raw) {
        Ok(todos) => {
            info!(
                "event=todos_load module=repo status=ok source=store count={}",
                todos.len()
            );
            todos
        }
        Err(err) => {
            warn!(
                "event=todos_load module=repo status=degraded error_code=unparseable bytes={} error={err}",
                raw.len()
            );
            Vec::new()
        }
    }
}

/// Serializes the whole list and overwrites the stored value.
pub fn save_todos(store: &mut impl KeyValueStore, todos: &[Todo]) -> StoreResult<()> {
    let json = serde_json::to_string(todos)?;
    store.set_item(TODOS_STORAGE_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::{load_todos, save_todos, TODOS_STORAGE_KEY};
    use crate::model::todo::Todo;
    use crate::repo::kv_store::{KeyValueStore, MemoryStore};

    #[test]
    fn missing_key_loads_empty() {
        let store = MemoryStore::new();
        assert!(load_todos(&store).is_empty());
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let mut store = MemoryStore::new();
        store.set_item(TODOS_STORAGE_KEY, "{not json").unwrap();
        assert!(load_todos(&store).is_empty());

        store.set_item(TODOS_STORAGE_KEY, r#"{"text":"x"}"#).unwrap();
        assert!(load_todos(&store).is_empty());
    }

    #[test]
    fn save_then_load_preserves_order_and_flags() {
        let mut store = MemoryStore::new();
        let todos = vec![Todo::with_done("hello", true), Todo::new("world")];

        save_todos(&mut store, &todos).unwrap();

        assert_eq!(
            store.get_item(TODOS_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"[{"text":"hello","done":true},{"text":"world","done":false}]"#)
        );
        assert_eq!(load_todos(&store), todos);
    }

    #[test]
    fn empty_list_persists_as_empty_array() {
        let mut store = MemoryStore::new();
        save_todos(&mut store, &[]).unwrap();
        assert_eq!(
            store.get_item(TODOS_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }
}
