//! Task Footer Component
//!
//! Remaining count, filter links and the clear-completed button.

use leptos::prelude::*;
use task_list::Filter;

use crate::context::TodoContext;

fn items_left(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[component]
pub fn TaskFooter(filter: Memo<Filter>) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    view! {
        <footer class="footer" class:hidden=move || ctx.with_tasks(|list| list.is_empty())>
            <span class="todo-count">{move || ctx.with_tasks(|list| items_left(list.remaining()))}</span>
            <ul class="filters">
                {Filter::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <li>
                                <a href=f.path() class:selected=move || filter.get() == f>
                                    {f.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Show when=move || ctx.with_tasks(|list| list.completed_count() > 0)>
                <button class="clear-completed" on:click=move |_| ctx.clear_completed()>
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}
