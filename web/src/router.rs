use crate::{
    controller::{chat_controller, echo_controller, health_check_controller, json_controller},
    response, sse, AppState,
};
use axum::{routing::get, Json, Router};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;

// This is the global definition of our OpenAPI document. To be a part
// of the rendered document, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Chat Demo API"
        ),
        paths(
            chat_controller::publish,
            echo_controller::read,
            health_check_controller::health_check,
            json_controller::read,
            sse::handler::sse_handler,
        ),
        components(
            schemas(
                response::echo::Echo,
                response::greeting::Greeting,
            )
        ),
        tags(
            (name = "chat_demo", description = "Demo endpoints and single-topic chat broadcast")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(chat_routes(app_state.clone()))
        .merge(sse_routes(app_state.clone()))
        .merge(echo_routes())
        .merge(json_routes())
        .merge(health_routes())
        .merge(api_doc_routes())
        .merge(chat_page_routes(&app_state))
        .fallback_service(static_routes(&app_state))
}

fn chat_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/chat", get(chat_controller::publish))
        .with_state(app_state)
}

fn sse_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/sse", get(sse::handler::sse_handler))
        .with_state(app_state)
}

fn echo_routes() -> Router {
    Router::new().route("/echo", get(echo_controller::read))
}

fn json_routes() -> Router {
    Router::new().route("/json", get(json_controller::read))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn api_doc_routes() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

fn chat_page_routes(app_state: &AppState) -> Router {
    Router::new().route_service("/", ServeFile::new(app_state.config.chat_page()))
}

// Anything without a dedicated route is looked up in the static directory
fn static_routes(app_state: &AppState) -> ServeDir {
    ServeDir::new(app_state.config.static_dir())
}
