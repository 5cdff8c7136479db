//! Task List Core
//!
//! Platform-independent task model, list operations and the JSON shapes
//! exchanged with the task server. Tasks are addressed by position.

mod error;
mod filter;
mod list;
mod task;
mod wire;

pub use error::{TaskListError, TaskListResult};
pub use filter::Filter;
pub use list::{EditOutcome, TaskList};
pub use task::Task;
pub use wire::{LoginRequest, LoginResponse, TasksEnvelope};
