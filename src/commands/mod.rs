//! HTTP API Wrappers
//!
//! Frontend bindings to the task server, organized by endpoint. Every
//! request goes through [`request`], which attaches the stored session token.

mod login;
mod task;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::auth;
use crate::config::{self, TOKEN_HEADER};

pub use login::*;
pub use task::*;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    /// Non-2xx response
    #[error("code {code}: {body}")]
    Status { code: u16, body: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            ApiError::Fetch(_) => None,
        }
    }

    /// Session missing or expired, the user has to log in again
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Build a request to an API path with the session token attached
pub fn request(method: Method, path: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(&config::api_url(path)).method(method);
    with_token(builder, auth::load_token().as_deref())
}

pub fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header(TOKEN_HEADER, token),
        None => builder,
    }
}

async fn into_json<T>(response: Response) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    if response.ok() {
        return Ok(response.json().await?);
    }
    let code = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("[HTTP] {} {} -> {}", response.url(), code, body.trim());
    Err(ApiError::Status { code, body })
}
