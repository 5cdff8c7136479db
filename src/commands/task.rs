//! Task Endpoint
//!
//! `GET /task/` and `PUT /task/`, both answering with the full list.

use gloo_net::http::Method;
use task_list::{TaskList, TasksEnvelope};

use super::{into_json, request, ApiResult};
use crate::config::TASK_PATH;

/// Fetch the whole list from the server
pub async fn fetch_all() -> ApiResult<TaskList> {
    let response = request(Method::GET, TASK_PATH).send().await?;
    let envelope: TasksEnvelope = into_json(response).await?;
    log::debug!("[TASKS] fetched {} tasks", envelope.tasks.len());
    Ok(envelope.into())
}

/// Replace the server's list and return what it stored
pub async fn replace_all(list: TaskList) -> ApiResult<TaskList> {
    let body = TasksEnvelope::from(list);
    log::debug!("[TASKS] replacing with {} tasks", body.tasks.len());
    let response = request(Method::PUT, TASK_PATH).json(&body)?.send().await?;
    let envelope: TasksEnvelope = into_json(response).await?;
    Ok(envelope.into())
}
