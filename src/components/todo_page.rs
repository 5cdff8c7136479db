//! Task List Page
//!
//! Served on `/`, `/active` and `/completed`; the path picks the filter.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use task_list::Filter;

use crate::components::{NewTaskInput, TaskFooter, TaskItem};
use crate::context::TodoContext;
use crate::store::{store_take_login_required, use_todo_store};

#[component]
pub fn TodoPage() -> impl IntoView {
    let ctx = expect_context::<TodoContext>();
    let store = use_todo_store();
    let navigate = use_navigate();
    let location = use_location();

    let filter = Memo::new(move |_| Filter::from_path(&location.pathname.get()));

    ctx.load();

    // A 401 from any task request sends the user to the login page
    Effect::new(move |_| {
        if store_take_login_required(&store) {
            log::info!("[AUTH] session rejected, redirecting to login");
            navigate("/auth", Default::default());
        }
    });

    let visible = move || ctx.with_tasks(|list| list.filtered(filter.get()));
    let is_empty = move || ctx.with_tasks(|list| list.is_empty());

    view! {
        <section class="todoapp">
            <header class="header">
                <h1>"todos"</h1>
                <NewTaskInput />
            </header>
            <section class="main" class:hidden=is_empty>
                <input
                    id="toggle-all"
                    class="toggle-all"
                    type="checkbox"
                    prop:checked=move || ctx.with_tasks(|list| list.all_completed())
                    on:change=move |_| ctx.toggle_all()
                />
                <label for="toggle-all">"Mark all as complete"</label>
                <ul class="todo-list">
                    <For
                        each=visible
                        key=|(index, task)| (*index, task.clone())
                        children=move |(index, task)| view! { <TaskItem index=index task=task /> }
                    />
                </ul>
            </section>
            <TaskFooter filter=filter />
        </section>
        <footer class="info">
            <p>"Double-click to edit a todo"</p>
            <p>
                <a href="/auth" on:click=move |_| ctx.logout()>"Log out"</a>
            </p>
        </footer>
    }
}
