//! Login Endpoint

use gloo_net::http::Method;
use task_list::{LoginRequest, LoginResponse};

use super::{into_json, request, ApiResult};
use crate::config::LOGIN_PATH;

/// Exchange credentials for a session token
pub async fn login(user: &str, password: &str) -> ApiResult<String> {
    let body = LoginRequest { user, password };
    let response = request(Method::POST, LOGIN_PATH).json(&body)?.send().await?;
    let LoginResponse { token } = into_json(response).await?;
    Ok(token)
}
