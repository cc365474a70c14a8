//! OpenAI adapter: streaming chat completions and live model listing.
//!
//! The streaming endpoint sends one `data:` frame per chunk. Each chunk
//! carries `choices[0].delta.content`, which is `null` on role-only and
//! finish frames. The stream ends with `data: [DONE]`.

use async_stream::try_stream;
use futures::{Stream, StreamExt, TryStreamExt};
use reqwest::header;
use serde::{Deserialize, Serialize};

use super::http::{self, UserMessage};
use super::kind::ProviderKind;
use super::sse;
use crate::error::{Error, Result};

const PROVIDER: ProviderKind = ProviderKind::OpenAI;

/// Terminal frame payload.
const DONE: &str = "[DONE]";

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [UserMessage<'a>; 1],
    stream: bool,
}

/// One streamed completion chunk.
#[derive(Debug, Default, Deserialize)]
pub struct ChatChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
pub struct Delta {
    pub content: Option<String>,
}

impl ChatChunk {
    /// Chunk whose first choice carries `content`.
    #[cfg(test)]
    pub fn with_content(content: Option<&str>) -> Self {
        Self {
            choices: vec![ChunkChoice {
                delta: Delta {
                    content: content.map(String::from),
                },
            }],
        }
    }

    /// Text of the first choice; `None` for null, missing or empty deltas.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|text| !text.is_empty())
    }
}

/// A data frame is either a chunk or an error object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Frame {
    Error { error: serde_json::Value },
    Chunk(ChatChunk),
}

/// Response body of `GET /v1/models`.
#[derive(Debug, Deserialize)]
struct ModelPage {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

/// Handle to the OpenAI API for one API key.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
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
        fragments(self.chunks(prompt, model))
    }

    /// Streams raw completion chunks until `[DONE]`.
    fn chunks<'a>(
        &'a self,
        prompt: &'a str,
        model: &'a str,
    ) -> impl Stream<Item = Result<ChatChunk>> + Send + 'a {
        let body = ChatRequest {
            model,
            messages: [UserMessage::new(prompt)],
            stream: true,
        };
        let request = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "text/event-stream")
            .json(&body);

        try_stream! {
            tracing::debug!("sending streaming completion to OpenAI (model {model})");
            let response = http::send(PROVIDER, request).await?;
            let mut frames = Box::pin(sse::events(response.bytes_stream()));
            while let Some(frame) = frames.next().await {
                let frame = frame.map_err(|source| Error::Transport { provider: PROVIDER, source })?;
                let data = frame.data.trim();
                if data == DONE {
                    tracing::debug!("received [DONE]");
                    break;
                }
                if data.is_empty() {
                    continue;
                }
                let parsed: Frame = serde_json::from_str(data)
                    .map_err(|source| Error::Decode { provider: PROVIDER, source })?;
                match parsed {
                    Frame::Chunk(chunk) => yield chunk,
                    Frame::Error { error } => Err(Error::ProviderStream {
                        provider: PROVIDER,
                        payload: error.to_string(),
                    })?,
                }
            }
        }
    }

    /// Lists model ids from `GET /v1/models`.
    ///
    /// Each call issues a fresh request; ids are yielded in the order the API
    /// returns them.
    pub fn list_models(&self) -> impl Stream<Item = Result<String>> + Send + '_ {
        let request = self
            .http
            .get(format!("{}/v1/models", self.base_url))
            .bearer_auth(&self.api_key);

        try_stream! {
            let response = http::send(PROVIDER, request).await?;
            let page: ModelPage = response
                .json()
                .await
                .map_err(|source| Error::Transport { provider: PROVIDER, source })?;
            tracing::debug!("OpenAI listed {} models", page.data.len());
            for entry in page.data {
                yield entry.id;
            }
        }
    }
}

/// Reduces completion chunks to their text, dropping null and empty deltas.
pub fn fragments<S>(chunks: S) -> impl Stream<Item = Result<String>>
where
    S: Stream<Item = Result<ChatChunk>>,
{
    chunks.try_filter_map(|chunk| async move { Ok::<_, Error>(chunk.into_text()) })
}
