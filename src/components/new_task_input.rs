//! New Task Input Component

use leptos::prelude::*;

use crate::context::TodoContext;

/// Header input; Enter adds the typed title
#[component]
pub fn NewTaskInput() -> impl IntoView {
    let ctx = expect_context::<TodoContext>();
    let (new_title, set_new_title) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let title = new_title.get_untracked();
        if title.trim().is_empty() {
            return;
        }
        ctx.add(title);
        set_new_title.set(String::new());
    };

    view! {
        <input
            class="new-todo"
            placeholder="What needs to be done?"
            autofocus
            prop:value=move || new_title.get()
            on:input=move |ev| set_new_title.set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
