//! Progress Stream Reader
//!
//! Reads the `data: <JSON>` lines sent by `/api/dm/generate/stream`
//! until a `completed` or `error` event arrives.

use futures::{Stream, StreamExt};
use serde::Deserialize;

use super::ApiError;
use crate::models::{GenerateDmResponse, ProgressUpdate};

const DATA_PREFIX: &str = "data:";

#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Progress(ProgressUpdate),
    Completed(Box<GenerateDmResponse>),
    Failed(String),
}

/// Loose view of an event, used to pick the variant
#[derive(Deserialize)]
struct RawEvent {
    stage: Option<String>,
    result: Option<GenerateDmResponse>,
    error: Option<String>,
}

/// Parse the JSON payload of one `data:` line
pub fn parse_event(data: &str) -> Result<StreamEvent, serde_json::Error> {
    let raw: RawEvent = serde_json::from_str(data)?;
    if raw.stage.as_deref() == Some("completed") {
        if let Some(result) = raw.result {
            return Ok(StreamEvent::Completed(Box::new(result)));
        }
    }
    if let Some(error) = raw.error {
        return Ok(StreamEvent::Failed(error));
    }
    serde_json::from_str::<ProgressUpdate>(data).map(StreamEvent::Progress)
}

/// Splits a byte stream into lines.
///
/// Bytes are held until a newline arrives, so a UTF-8 sequence split
/// across two chunks is decoded as one character.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    /// Append a chunk and return every line it completed
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            lines.push(decode_line(&line[..line.len() - 1]));
        }
        lines
    }

    /// Whatever is left once the body has ended
    pub fn finish(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.pending);
        Some(decode_line(&rest))
    }
}

fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim_end_matches('\r').to_string()
}

/// Handle one line; `Some` means the stream reached a terminal event
fn handle_line(
    line: &str,
    on_progress: &mut impl FnMut(ProgressUpdate),
) -> Option<Result<GenerateDmResponse, ApiError>> {
    let data = line.strip_prefix(DATA_PREFIX)?.trim_start();
    match parse_event(data) {
        Ok(StreamEvent::Progress(update)) => {
            log::debug!("progress {:?} {}%: {}", update.stage, update.progress, update.message);
            on_progress(update);
            None
        }
        Ok(StreamEvent::Completed(result)) => Some(Ok(*result)),
        Ok(StreamEvent::Failed(message)) => Some(Err(ApiError::from_server_message(message))),
        Err(e) => {
            log::warn!("skipping unparsable stream event: {}", e);
            None
        }
    }
}

/// Consume a body stream until a terminal event.
///
/// Returns as soon as the terminal event is seen; the rest of the body is
/// dropped with the stream.
pub async fn read_event_stream<S, B, F>(
    mut stream: S,
    mut on_progress: F,
) -> Result<GenerateDmResponse, ApiError>
where
    S: Stream<Item = Result<B, ApiError>> + Unpin,
    B: AsRef<[u8]>,
    F: FnMut(ProgressUpdate),
{
    let mut buffer = LineBuffer::default();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        for line in buffer.push(chunk.as_ref()) {
            if let Some(outcome) = handle_line(&line, &mut on_progress) {
                return outcome;
            }
        }
    }

    if let Some(line) = buffer.finish() {
        if let Some(outcome) = handle_line(&line, &mut on_progress) {
            return outcome;
        }
    }

    Err(ApiError::StreamEnded)
}
