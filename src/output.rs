//! Output rendering for streamed replies.
//!
//! Defines the [`Renderer`] trait that decouples provider output from the
//! display layer, and [`stream_response`], which drives a fragment stream
//! into a renderer.

use std::io::{self, Write};

use futures::{Stream, StreamExt};

use crate::constants::RESPONSE_HEADER;
use crate::error::Result;

/// Trait for rendering a streamed reply.
pub trait Renderer {
    /// Called once before the first fragment.
    fn render_header(&mut self) -> io::Result<()>;

    /// Render a single fragment as it arrives.
    fn render_token(&mut self, token: &str) -> io::Result<()>;

    /// Called once after the last fragment, including after a failure.
    fn render_done(&mut self) -> io::Result<()>;
}

/// Writes a streamed reply to any [`Write`] sink, flushing every fragment.
///
/// Fragments are written verbatim with no separators, so the sink sees
/// exactly the concatenation of what the provider produced.
pub struct StreamRenderer<W: Write> {
    out: W,
}

impl StreamRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for StreamRenderer<W> {
    fn render_header(&mut self) -> io::Result<()> {
        self.out.write_all(RESPONSE_HEADER.as_bytes())?;
        self.out.flush()
    }

    fn render_token(&mut self, token: &str) -> io::Result<()> {
        self.out.write_all(token.as_bytes())?;
        // Flush immediately so each fragment appears as it arrives
        self.out.flush()
    }

    fn render_done(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Renders `fragments` in order: header, each fragment, trailing newline.
/// Returns the number of fragments written.
///
/// The header waits for the first item, so a request the provider rejects
/// outright fails with nothing written. Once the header is out, a stream
/// error leaves the fragments already written on the sink, the trailing
/// newline is still written, and the error is returned.
pub async fn stream_response<S>(fragments: S, renderer: &mut dyn Renderer) -> Result<usize>
where
    S: Stream<Item = Result<String>>,
{
    let mut fragments = std::pin::pin!(fragments);
    let mut next = match fragments.next().await {
        Some(Err(e)) => return Err(e),
        first => first,
    };
    renderer.render_header()?;

    let mut written = 0;
    let outcome = loop {
        match next {
            Some(Ok(fragment)) => {
                renderer.render_token(&fragment)?;
                written += 1;
            }
            Some(Err(e)) => break Err(e),
            None => break Ok(written),
        }
        next = fragments.next().await;
    };

    renderer.render_done()?;
    outcome
}
