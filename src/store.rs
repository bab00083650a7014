//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The collection
//! operations are plain functions over `Vec<Item>` so they can be unit
//! tested natively; the `store_*` wrappers apply them through the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The authoritative in-memory item collection, insertion order
    pub items: Vec<Item>,
    /// True while the initial fetch is in flight
    pub loading: bool,
    /// User-facing message when the initial fetch failed
    pub error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Outcome of committing an edit back into the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Unchanged,
    NotFound,
}

// ========================
// Collection Operations
// ========================

/// Insert a new item at the front (newest first)
pub fn prepend_item(items: &mut Vec<Item>, item: Item) {
    items.insert(0, item);
}

/// Remove an item by id; returns whether anything was removed
pub fn remove_item(items: &mut Vec<Item>, id: u64) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Commit trimmed edits to the item with the given id.
/// A no-op edit (trimmed values equal the stored ones) leaves the
/// collection untouched and reports `Unchanged`.
pub fn apply_edit(items: &mut [Item], id: u64, title: &str, body: &str) -> EditOutcome {
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        return EditOutcome::NotFound;
    };
    let title = title.trim();
    let body = body.trim();
    if item.title == title && item.body == body {
        return EditOutcome::Unchanged;
    }
    item.title = title.to_string();
    item.body = body.to_string();
    EditOutcome::Updated
}

// ========================
// Store Wrappers
// ========================

/// Prepend a new item to the store
pub fn store_prepend_item(store: &AppStore, item: Item) {
    prepend_item(&mut store.items().write(), item);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, id: u64) -> bool {
    remove_item(&mut store.items().write(), id)
}

/// Apply an edit to an item in the store by ID
pub fn store_apply_edit(store: &AppStore, id: u64, title: &str, body: &str) -> EditOutcome {
    apply_edit(&mut store.items().write(), id, title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, title: &str, body: &str) -> Item {
        Item::new(id, title.to_string(), body.to_string())
    }

    fn sample() -> Vec<Item> {
        vec![
            make_item(1, "alpha", "first"),
            make_item(5, "beta", "second"),
            make_item(9, "gamma", "third"),
        ]
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut items = sample();
        prepend_item(&mut items, make_item(42, "delta", "fresh"));
        assert_eq!(items[0].id, 42);
        assert_eq!(items.len(), 4);
        // Existing order is preserved behind the new head
        assert_eq!(items[1].id, 1);
        assert_eq!(items[3].id, 9);
    }

    #[test]
    fn test_remove_item_removes_exactly_one_id() {
        let mut items = sample();
        assert!(remove_item(&mut items, 5));
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 9]
        );
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut items = sample();
        assert!(!remove_item(&mut items, 77));
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_apply_edit_commits_trimmed_values() {
        let mut items = sample();
        let outcome = apply_edit(&mut items, 5, "  beta prime ", " updated ");
        assert_eq!(outcome, EditOutcome::Updated);
        assert_eq!(items[1].title, "beta prime");
        assert_eq!(items[1].body, "updated");
        // Other items untouched
        assert_eq!(items[0], make_item(1, "alpha", "first"));
    }

    #[test]
    fn test_apply_edit_detects_noop() {
        let mut items = sample();
        // Identical after trim: no write
        let outcome = apply_edit(&mut items, 1, " alpha ", "first");
        assert_eq!(outcome, EditOutcome::Unchanged);
        assert_eq!(items, sample());
    }

    #[test]
    fn test_apply_edit_missing_id() {
        let mut items = sample();
        assert_eq!(apply_edit(&mut items, 123, "x", "y"), EditOutcome::NotFound);
        assert_eq!(items, sample());
    }
}
