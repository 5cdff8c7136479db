//! Todo Frontend
//!
//! TodoMVC task list backed by a remote task server, with a token login.

pub mod app;
pub mod auth;
pub mod commands;
pub mod components;
pub mod config;
pub mod context;
pub mod logging;
pub mod store;

pub use app::App;
