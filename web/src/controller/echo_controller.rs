use crate::params::echo::EchoParams;
use crate::response::echo::Echo;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;

use log::*;

/// GET the `input` query parameter back in several forms
#[utoipa::path(
    get,
    path = "/echo",
    params(EchoParams),
    responses(
        (status = 200, description = "Input echoed as-is, upper-cased, counted and reversed", body = Echo),
    )
)]
pub async fn read(params: Option<Query<EchoParams>>) -> impl IntoResponse {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    trace!("GET Echo input: {:?}", params.input);

    Json(Echo::new(&params.input))
}
