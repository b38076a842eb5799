//! Server-Sent Events parser for streaming chat completion responses.

use anyhow::Result;
use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Stops at the `data: [DONE]` marker. A transport error ends the stream
/// after yielding it.
pub fn sse_to_text_stream<E>(
    byte_stream: impl Stream<Item = Result<Bytes, E>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send
where
    E: std::fmt::Display + Send + 'static,
{
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(anyhow::anyhow!("Stream error: {e}"));
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();
                let line = line.trim();

                if line == "data: [DONE]" {
                    return;
                }
                if let Some(content) = parse_sse_line(line) {
                    yield Ok(content);
                }
            }
        }

        // Some servers omit the trailing newline on the last event.
        if let Some(content) = parse_sse_line(buffer.trim()) {
            yield Ok(content);
        }
    }
}

/// Extracts the text content of a single trimmed SSE line.
///
/// Returns `None` for non-data lines, empty deltas and unparseable JSON.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data:")?.trim_start();

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn test_parse_sse_line_with_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"CREATE"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("CREATE".to_string()));
    }

    #[test]
    fn test_parse_sse_line_without_space_after_colon() {
        let line = r#"data:{"choices":[{"delta":{"content":"TABLE"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("TABLE".to_string()));
    }

    #[test]
    fn test_parse_sse_line_with_null_content() {
        let line = r#"data: {"choices":[{"delta":{}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_multiple_choices() {
        let line =
            r#"data: {"choices":[{"delta":{"content":"DROP"}},{"delta":{"content":" TABLE"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("DROP TABLE".to_string()));
    }

    #[test]
    fn test_parse_sse_line_ignores_other_lines() {
        assert_eq!(parse_sse_line(""), None);
        assert_eq!(parse_sse_line(": keep-alive"), None);
        assert_eq!(parse_sse_line("data: [DONE]"), None);
        assert_eq!(parse_sse_line("data: not json"), None);
    }

    #[tokio::test]
    async fn test_stream_joins_events_split_across_chunks() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from(
                "data: {\"choices\":[{\"delta\":{\"content\":\"SELECT\"}}]}\n\ndata: {\"choi",
            )),
            Ok(Bytes::from(
                "ces\":[{\"delta\":{\"content\":\" 1;\"}}]}\n\ndata: [DONE]\n\n",
            )),
            Ok(Bytes::from(
                "data: {\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n",
            )),
        ];

        let stream = sse_to_text_stream(futures_util::stream::iter(chunks));
        let parts: Vec<String> = stream.map(|r| r.unwrap()).collect().await;

        assert_eq!(parts, vec!["SELECT".to_string(), " 1;".to_string()]);
    }

    #[tokio::test]
    async fn test_stream_surfaces_transport_error() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::from(
                "data: {\"choices\":[{\"delta\":{\"content\":\"partial\"}}]}\n",
            )),
            Err(std::io::Error::other("connection reset")),
        ];

        let stream = sse_to_text_stream(futures_util::stream::iter(chunks));
        let items: Vec<Result<String>> = stream.collect().await;

        assert_eq!(items.len(), 2);
        assert!(items[1].as_ref().unwrap_err().to_string().contains("connection reset"));
    }
}
