use crate::response::greeting::Greeting;
use axum::response::IntoResponse;
use axum::Json;

/// GET a fixed JSON document
#[utoipa::path(
    get,
    path = "/json",
    responses(
        (status = 200, description = "Fixed greeting payload", body = Greeting),
    )
)]
pub async fn read() -> impl IntoResponse {
    Json(Greeting::default())
}
