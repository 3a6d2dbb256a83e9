use axum::response::sse::Event;

/// Encode a chat message as a single SSE event.
///
/// On the wire this is `data: <message>\n\n`. Messages spanning several lines
/// become one `data:` field per line, which clients join back with `\n`.
pub fn event(message: &str) -> Event {
    Event::default().data(normalize_line_breaks(message))
}

/// Fold `\r\n` and lone `\r` into `\n`.
///
/// axum rejects carriage returns inside SSE fields, and the event stream format
/// treats all three as line terminators anyway.
pub(crate) fn normalize_line_breaks(message: &str) -> String {
    message.replace("\r\n", "\n").replace('\r', "\n")
}
