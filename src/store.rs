//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use task_list::TaskList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Last list received from (or sent to) the server
    pub tasks: TaskList,
    /// Set when the server answered 401; the task view navigates to login
    pub login_required: bool,
    /// Last login attempt was rejected
    pub wrong_credentials: bool,
    /// Bumped on logout; responses started under an older session are dropped
    pub session: u32,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_tasks_untracked(store: &TodoStore) -> TaskList {
    store.tasks().get_untracked()
}

pub fn store_set_tasks(store: &TodoStore, tasks: TaskList) {
    store.tasks().set(tasks);
}

pub fn store_require_login(store: &TodoStore) {
    store.login_required().set(true);
}

pub fn store_clear_login_required(store: &TodoStore) {
    store.login_required().set(false);
}

/// Consume a pending login redirect, returning whether one was pending
pub fn store_take_login_required(store: &TodoStore) -> bool {
    if store.login_required().get() {
        store.login_required().set(false);
        true
    } else {
        false
    }
}

pub fn store_set_wrong_credentials(store: &TodoStore, wrong: bool) {
    store.wrong_credentials().set(wrong);
}

pub fn store_session(store: &TodoStore) -> u32 {
    store.session().get_untracked()
}

pub fn store_end_session(store: &TodoStore) {
    store.session().update(|session| *session = session.wrapping_add(1));
    store.tasks().set(TaskList::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_store(test: impl FnOnce(TodoStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(TodoState::default())));
    }

    #[test]
    fn test_login_required_is_consumed_once() {
        with_store(|store| {
            store_require_login(&store);
            assert!(store_take_login_required(&store));
            assert!(!store_take_login_required(&store));
        });
    }

    #[test]
    fn test_successful_login_drops_pending_redirect() {
        with_store(|store| {
            // 401 landed after the task view was gone
            store_require_login(&store);
            store_set_wrong_credentials(&store, false);
            store_clear_login_required(&store);
            assert!(!store_take_login_required(&store));
        });
    }

    #[test]
    fn test_end_session_clears_tasks_and_bumps_session() {
        with_store(|store| {
            let mut list = TaskList::default();
            list.add("left over");
            store_set_tasks(&store, list);
            let before = store_session(&store);

            store_end_session(&store);

            assert_ne!(store_session(&store), before);
            assert!(store_tasks_untracked(&store).is_empty());
        });
    }
}
