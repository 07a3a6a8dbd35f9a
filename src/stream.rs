use crate::models::StreamChunk;
use axum::response::sse::Event;
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Per-request emission state: the resolved lines plus a cursor into them.
struct StreamSession {
    lines: Vec<String>,
    cursor: usize,
    interval: Duration,
}

/// Turns a resolved suggestion into a paced SSE event stream: one frame per
/// line, each preceded by one interval of delay. The timer lives inside the
/// stream, so dropping the response body (peer disconnect) cancels the
/// in-flight sleep and nothing further is written.
pub fn stream_lines(
    text: &str,
    interval: Duration,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let session = StreamSession {
        lines: text.split('\n').map(str::to_string).collect(),
        cursor: 0,
        interval,
    };

    stream::unfold(session, |mut session| async move {
        let line = session.lines.get(session.cursor)?.clone();
        tokio::time::sleep(session.interval).await;
        session.cursor += 1;
        let event = Event::default().data(chunk_payload(&line));
        Some((Ok(event), session))
    })
}

/// JSON payload for one frame. Every line is sent with a trailing newline
/// so the client can concatenate `content` fields verbatim.
pub fn chunk_payload(line: &str) -> String {
    let chunk = StreamChunk {
        content: format!("{}\n", line),
    };
    serde_json::to_string(&chunk).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use tokio::time::Instant;

    #[test]
    fn payload_is_json_with_trailing_newline() {
        assert_eq!(
            chunk_payload("const x = 1;"),
            r#"{"content":"const x = 1;\n"}"#
        );
    }

    #[test]
    fn payload_round_trips() {
        let chunk: StreamChunk = serde_json::from_str(&chunk_payload("hello")).unwrap();
        assert_eq!(chunk.content, "hello\n");
    }

    #[tokio::test(start_paused = true)]
    async fn emits_one_frame_per_line() {
        let events: Vec<_> = stream_lines("a\nb\nc", DEFAULT_INTERVAL).collect().await;
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|event| event.is_ok()));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_still_emits_a_single_frame() {
        // "".split('\n') yields one empty line, so a lone "\n" chunk goes out.
        let events: Vec<_> = stream_lines("", DEFAULT_INTERVAL).collect().await;
        assert_eq!(events.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn frames_are_paced_at_the_interval() {
        let start = Instant::now();
        let events: Vec<_> = stream_lines("a\nb\nc\nd", DEFAULT_INTERVAL).collect().await;
        assert_eq!(events.len(), 4);
        assert_eq!(start.elapsed(), DEFAULT_INTERVAL * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_stream_stops_emission() {
        let mut stream = Box::pin(stream_lines("a\nb\nc", DEFAULT_INTERVAL));
        let first = stream.next().await;
        assert!(first.is_some());
        drop(stream);
        // Nothing to assert beyond not hanging: the remaining sleeps are
        // cancelled with the stream value.
    }
}
