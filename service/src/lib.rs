use config::Config;
use sse::Bus;
use std::sync::Arc;

pub mod config;
pub mod logging;

// Service-level state shared by every request handler
// Needs to implement Clone to be able to be passed into Router as State
#[derive(Clone)]
pub struct AppState {
    pub chat_bus: Arc<Bus>,
    pub config: Config,
}

impl AppState {
    pub fn new(app_config: Config, chat_bus: &Arc<Bus>) -> Self {
        Self {
            chat_bus: Arc::clone(chat_bus),
            config: app_config,
        }
    }

    pub fn chat_bus_ref(&self) -> &Bus {
        self.chat_bus.as_ref()
    }
}
