//! Task list errors.

use thiserror::Error;

pub type TaskListResult<T> = Result<T, TaskListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskListError {
    /// Position no longer exists, usually because the list was replaced
    /// by a server response while the view still showed the old one.
    #[error("task index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}
