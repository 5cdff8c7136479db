//! Todo Frontend Entry Point

use leptos::prelude::*;
use todo_ui::{logging, App};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
