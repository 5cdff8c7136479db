//! Todo Frontend App
//!
//! Router and shared state. `/`, `/active` and `/completed` show the task
//! list, `/auth` the login form; anything else goes back to `/`.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{LoginPage, TodoPage};
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(TodoState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(TodoContext::new(store));

    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=TodoPage />
                    <Route path=path!("/active") view=TodoPage />
                    <Route path=path!("/completed") view=TodoPage />
                    <Route path=path!("/auth") view=LoginPage />
                </Routes>
            </main>
        </Router>
    }
}
