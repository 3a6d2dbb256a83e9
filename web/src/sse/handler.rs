use crate::AppState;
use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use log::*;
use ::sse::Connection;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::mpsc;

/// SSE handler that streams every chat message published after the client connects.
///
/// The stream owns the bus subscription. hyper drops the stream when the client
/// disconnects, the connection fails or the server shuts down, and dropping it
/// unsubscribes.
#[utoipa::path(
    get,
    path = "/sse",
    responses(
        (status = 200, description = "Open-ended stream of `data: <message>` events", body = String, content_type = "text/event-stream"),
    )
)]
pub(crate) async fn sse_handler(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Subscribe before the response goes out so nothing published after the
    // headers reach the client is missed
    let subscription = app_state.chat_bus.subscribe_guarded(Connection::new(tx));
    debug!("Established SSE connection {}", subscription.id().as_str());

    let stream = stream! {
        let subscription = subscription;

        while let Some(event) = rx.recv().await {
            yield event;
        }

        // The bus dropped our sender; the guard is released right after this
        debug!("SSE channel closed for {}", subscription.id().as_str());
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new().interval(Duration::from_secs(app_state.config.sse_keep_alive_secs)),
    )
}
