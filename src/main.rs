use log::{error, info};
use service::{config::Config, logging::Logger, AppState};
use sse::Bus;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config as &Config);

    info!("Starting chat demo server on {}", config.listen_addr());

    let chat_bus = Arc::new(Bus::new());
    let app_state = AppState::new(config, &chat_bus);

    if let Err(e) = web::init_server(app_state).await {
        error!("Server exited with error: {e}");
        std::process::exit(1);
    }

    info!(
        "Server stopped with {} subscriber(s) still registered",
        chat_bus.subscriber_count()
    );
}
