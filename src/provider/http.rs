//! Request plumbing shared by both provider adapters.

use reqwest::{RequestBuilder, Response};
use serde::Serialize;

use super::kind::ProviderKind;
use crate::error::{Error, Result};

/// A single user turn. Both APIs accept this shape.
#[derive(Debug, Serialize)]
pub struct UserMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> UserMessage<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

/// Sends `request` and turns a non-success status into [`Error::Provider`]
/// carrying the response body.
pub async fn send(provider: ProviderKind, request: RequestBuilder) -> Result<Response> {
    let response = request
        .send()
        .await
        .map_err(|source| Error::Transport { provider, source })?;

    let status = response.status();
    tracing::debug!("{provider} responded with status {status}");
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .map_err(|source| Error::Transport { provider, source })?;
    Err(Error::Provider {
        provider,
        status: status.as_u16(),
        body,
    })
}

/// Trims a trailing slash so paths can be appended with `format!`.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
