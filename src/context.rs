//! Task Synchronization Context
//!
//! Every mutation edits the local list, shows it right away, then sends the
//! whole list to the server and adopts whatever the server answers with.
//! Responses are applied in arrival order; there is no ordering between
//! overlapping requests. Answers that arrive after a logout are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_list::{EditOutcome, TaskList, TaskListResult};

use crate::auth;
use crate::commands::{self, ApiError, ApiResult};
use crate::store::{self, TodoStore, TodoStateStoreFields};

/// Task operations shared via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: TodoStore,
}

impl TodoContext {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Read the current list (tracked)
    pub fn with_tasks<R>(&self, f: impl FnOnce(&TaskList) -> R) -> R {
        self.store.tasks().with(f)
    }

    /// Load the list from the server
    pub fn load(&self) {
        let store = self.store;
        let session = store::store_session(&store);
        spawn_local(async move {
            let result = commands::fetch_all().await;
            apply_response(&store, session, "load", result);
        });
    }

    /// Re-fetch, append a task to the fresh list, then replace
    pub fn add(&self, title: String) {
        if title.trim().is_empty() {
            return;
        }
        let store = self.store;
        let session = store::store_session(&store);
        spawn_local(async move {
            let mut list = match commands::fetch_all().await {
                Ok(list) => list,
                Err(err) => return handle_error(&store, "add", err),
            };
            if store::store_session(&store) != session {
                return;
            }
            list.add(&title);
            store::store_set_tasks(&store, list.clone());
            push(store, session, list).await;
        });
    }

    pub fn set_completed(&self, index: usize, completed: bool) {
        self.mutate("toggle", |list| list.set_completed(index, completed));
    }

    pub fn finish_edit(&self, index: usize, title: String) {
        self.mutate("edit", |list| {
            if list.finish_edit(index, &title)? == EditOutcome::Removed {
                log::debug!("[TASKS] task {} emptied, removing", index);
            }
            Ok(())
        });
    }

    pub fn remove(&self, index: usize) {
        self.mutate("remove", |list| list.remove(index).map(|_| ()));
    }

    pub fn clear_completed(&self) {
        self.mutate("clear completed", |list| {
            list.clear_completed();
            Ok(())
        });
    }

    /// Complete everything, or reopen everything when all are done
    pub fn toggle_all(&self) {
        self.mutate("mark all", |list| {
            let completed = !list.all_completed();
            list.mark_all(completed);
            Ok(())
        });
    }

    /// Forget the session and the list it loaded
    pub fn logout(&self) {
        log::info!("[AUTH] logging out");
        auth::clear_token();
        store::store_end_session(&self.store);
    }

    fn mutate(&self, action: &'static str, edit: impl FnOnce(&mut TaskList) -> TaskListResult<()>) {
        let store = self.store;
        if let Some(list) = apply_edit(&store, action, edit) {
            let session = store::store_session(&store);
            spawn_local(push(store, session, list));
        }
    }
}

/// Apply a local edit to the store, returning the list to send.
/// `None` when the edit was rejected; the store is left untouched.
fn apply_edit(
    store: &TodoStore,
    action: &str,
    edit: impl FnOnce(&mut TaskList) -> TaskListResult<()>,
) -> Option<TaskList> {
    let mut list = store::store_tasks_untracked(store);
    if let Err(err) = edit(&mut list) {
        log::warn!("[TASKS] {} skipped: {}", action, err);
        return None;
    }
    store::store_set_tasks(store, list.clone());
    Some(list)
}

async fn push(store: TodoStore, session: u32, list: TaskList) {
    let result = commands::replace_all(list).await;
    apply_response(&store, session, "save", result);
}

/// Adopt the server's list, or report the failure
fn apply_response(store: &TodoStore, session: u32, action: &str, result: ApiResult<TaskList>) {
    if store::store_session(store) != session {
        log::debug!("[TASKS] dropping {} response from a previous session", action);
        return;
    }
    match result {
        Ok(list) => store::store_set_tasks(store, list),
        Err(err) => handle_error(store, action, err),
    }
}

fn handle_error(store: &TodoStore, action: &str, err: ApiError) {
    log::error!("[TASKS] {} failed: {}", action, err);
    if err.is_unauthorized() {
        store::store_require_login(store);
    }
}
