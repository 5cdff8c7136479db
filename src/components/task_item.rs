//! Task Item Component
//!
//! One row of the list. Double-click the label to edit; Enter or leaving
//! the field saves, Escape puts the old title back.

use leptos::html;
use leptos::prelude::*;
use task_list::Task;

use crate::context::TodoContext;

#[component]
pub fn TaskItem(index: usize, task: Task) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();
    let (editing, set_editing) = signal(false);
    let edit_input = NodeRef::<html::Input>::new();

    let completed = task.completed;
    let title = task.title;

    // Enter fires before blur, only the first one saves
    let commit = move |value: String| {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        ctx.finish_edit(index, value);
    };

    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                let _ = input.focus();
            }
        }
    });

    let original = title.clone();
    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => commit(event_target_value(&ev)),
        "Escape" => {
            set_editing.set(false);
            if let Some(input) = edit_input.get_untracked() {
                input.set_value(&original);
            }
        }
        _ => {}
    };

    view! {
        <li class="todo" class:completed=completed class:editing=move || editing.get()>
            <div class="view">
                <input
                    class="toggle"
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |ev| ctx.set_completed(index, event_target_checked(&ev))
                />
                <label on:dblclick=move |_| set_editing.set(true)>{title.clone()}</label>
                <button class="destroy" on:click=move |_| ctx.remove(index)></button>
            </div>
            <input
                class="edit"
                node_ref=edit_input
                prop:value=title
                on:blur=move |ev| commit(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </li>
    }
}
