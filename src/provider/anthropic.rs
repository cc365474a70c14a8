//! Anthropic adapter: streaming Messages API.
//!
//! Anthropic streams typed frames rather than OpenAI-style chunks:
//! - `message_start`: message metadata
//! - `content_block_start`: begin a content block
//! - `content_block_delta`: incremental content (`text_delta`)
//! - `content_block_stop`: end of the content block
//! - `message_delta` / `message_stop`: stop reason and usage
//! - `ping`, `error`
//!
//! Only the first text block is streamed: `content_block_stop` ends the
//! reply even if more frames follow.

use std::pin::pin;

use async_stream::try_stream;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use super::http::{self, UserMessage};
use super::kind::ProviderKind;
use super::sse;
use crate::constants::{ANTHROPIC_API_VERSION, ANTHROPIC_MAX_TOKENS};
use crate::error::{Error, Result};

const PROVIDER: ProviderKind = ProviderKind::Anthropic;

/// Request body for `POST /v1/messages`.
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [UserMessage<'a>; 1],
    stream: bool,
}

/// A decoded Anthropic stream frame.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "content_block_start")]
    ContentBlockStart {},
    #[serde(rename = "content_block_delta")]
    ContentBlockDelta { delta: BlockDelta },
    #[serde(rename = "content_block_stop")]
    ContentBlockStop {},
    #[serde(rename = "error")]
    Error { error: serde_json::Value },
    /// message_start, message_delta, message_stop, ping, and anything newer.
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BlockDelta {
    #[serde(rename = "text_delta")]
    TextDelta { text: String },
    #[serde(other)]
    Other,
}

#[cfg(test)]
impl Event {
    pub fn text_delta(text: &str) -> Self {
        Self::ContentBlockDelta {
            delta: BlockDelta::TextDelta {
                text: text.to_string(),
            },
        }
    }
}

/// Handle to the Anthropic API for one API key.
#[derive(Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(http: reqwest::Client, api_key: &str, base_url: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
            base_url: http::normalize_base_url(base_url),
        }
    }

    /// Streams the reply to `prompt` as plain text fragments.
    pub fn stream<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
    ) -> impl Stream<Item = Result<String>> + Send + 'a {
        fragments(self.events(prompt, model))
    }

    /// Streams decoded frames until the body ends.
    fn events<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
    ) -> impl Stream<Item = Result<Event>> + Send + 'a {
        let body = MessagesRequest {
            model,
            max_tokens: ANTHROPIC_MAX_TOKENS,
            messages: [UserMessage::new(prompt)],
            stream: true,
        };
        let request = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&body);

        try_stream! {
            tracing::debug!("sending streaming message to Anthropic (model {model})");
            let response = http::send(PROVIDER, request).await?;
            let mut frames = Box::pin(sse::events(response.bytes_stream()));
            while let Some(frame) = frames.next().await {
                let frame = frame.map_err(|source| Error::Transport { provider: PROVIDER, source })?;
                tracing::trace!("anthropic frame {:?}", frame.event);
                if frame.data.trim().is_empty() {
                    continue;
                }
                let event: Event = serde_json::from_str(&frame.data)
                    .map_err(|source| Error::Decode { provider: PROVIDER, source })?;
                yield event;
            }
        }
    }
}

/// Reduces Anthropic frames to text fragments.
///
/// Block starts and bookkeeping frames are skipped, text deltas are yielded,
/// and the first `content_block_stop` ends the sequence.
pub fn fragments<S>(events: S) -> impl Stream<Item = Result<String>>
where
    S: Stream<Item = Result<Event>>,
{
    try_stream! {
        let mut events = pin!(events);
        while let Some(event) = events.next().await {
            match event? {
                Event::ContentBlockStart {} => continue,
                Event::ContentBlockDelta { delta: BlockDelta::TextDelta { text } } => {
                    if !text.is_empty() {
                        yield text;
                    }
                }
                Event::ContentBlockStop {} => {
                    tracing::debug!("content_block_stop, ending stream");
                    break;
                }
                Event::Error { error } => Err(Error::ProviderStream {
                    provider: PROVIDER,
                    payload: error.to_string(),
                })?,
                Event::ContentBlockDelta { delta: BlockDelta::Other } | Event::Other => {}
            }
        }
    }
}
