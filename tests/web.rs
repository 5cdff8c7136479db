//! Browser tests for token storage and the request hook.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use gloo_net::http::{Method, RequestBuilder};
use todo_ui::auth;
use todo_ui::commands::{self, with_token};
use todo_ui::config::{TASK_PATH, TOKEN_HEADER};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn token_round_trips_through_local_storage() {
    auth::clear_token();
    assert_eq!(auth::load_token(), None);

    auth::store_token("abc.def.ghi");
    assert_eq!(auth::load_token().as_deref(), Some("abc.def.ghi"));

    auth::clear_token();
    assert_eq!(auth::load_token(), None);
}

#[wasm_bindgen_test]
fn empty_token_counts_as_logged_out() {
    auth::store_token("");
    assert_eq!(auth::load_token(), None);
    auth::clear_token();
}

#[wasm_bindgen_test]
fn token_header_attached_when_present() {
    let request = with_token(RequestBuilder::new("/task/"), Some("secret"))
        .build()
        .unwrap();
    assert_eq!(request.headers().get(TOKEN_HEADER).as_deref(), Some("secret"));
}

#[wasm_bindgen_test]
fn no_token_header_without_session() {
    auth::clear_token();
    let request = commands::request(Method::GET, TASK_PATH).build().unwrap();
    assert_eq!(request.headers().get(TOKEN_HEADER), None);
}

#[wasm_bindgen_test]
fn request_hook_reads_stored_token() {
    auth::store_token("stored");
    let request = commands::request(Method::PUT, TASK_PATH).build().unwrap();
    assert_eq!(request.headers().get(TOKEN_HEADER).as_deref(), Some("stored"));
    assert!(request.url().ends_with(TASK_PATH));
    auth::clear_token();
}
