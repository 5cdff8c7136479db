//! Login Page
//!
//! Posts credentials, keeps the returned token and goes back to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::auth;
use crate::commands;
use crate::store::{
    store_clear_login_required, store_set_wrong_credentials, use_todo_store, TodoStateStoreFields,
};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_todo_store();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (wait_for_response, set_wait_for_response) = signal(false);

    // A redirect raised by a late 401 is already served by showing this page
    store_clear_login_required(&store);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = email.get_untracked();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() || wait_for_response.get_untracked() {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            set_wait_for_response.set(true);
            let result = commands::login(&user, &pass).await;
            set_wait_for_response.set(false);
            match result {
                Ok(token) => {
                    log::info!("[AUTH] logged in as {}", user);
                    auth::store_token(&token);
                    store_set_wrong_credentials(&store, false);
                    store_clear_login_required(&store);
                    set_password.set(String::new());
                    navigate("/", Default::default());
                }
                Err(err) => {
                    log::error!("[AUTH] login as {} failed: {}", user, err);
                    store_set_wrong_credentials(&store, true);
                }
            }
        });
    };

    let button_disabled = move || {
        wait_for_response.get() || email.get().is_empty() || password.get().is_empty()
    };

    view! {
        <section class="todoapp login">
            <header class="header">
                <h1>"todos"</h1>
            </header>
            <form class="login-form" on:submit=on_submit>
                <Show when=move || store.wrong_credentials().get()>
                    <p class="login-error">"Wrong credentials, please try again."</p>
                </Show>
                <input
                    type="email"
                    required
                    placeholder="Email address"
                    prop:value=move || email.get()
                    prop:disabled=move || wait_for_response.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    required
                    placeholder="Password"
                    prop:value=move || password.get()
                    prop:disabled=move || wait_for_response.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" prop:disabled=button_disabled>"Log in"</button>
            </form>
        </section>
    }
}
