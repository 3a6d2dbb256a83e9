use crate::params::chat::ChatParams;
use crate::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use log::*;

/// GET publish a chat message to every connected `/sse` client
#[utoipa::path(
    get,
    path = "/chat",
    params(ChatParams),
    responses(
        (status = 200, description = "Message handed to the chat bus"),
    )
)]
pub async fn publish(
    State(app_state): State<AppState>,
    params: Option<Query<ChatParams>>,
) -> impl IntoResponse {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    debug!(
        "GET Chat message for {} subscriber(s)",
        app_state.chat_bus_ref().subscriber_count()
    );

    app_state.chat_bus_ref().publish(&params.message);

    StatusCode::OK
}
