//! HTTP layer: routes, handlers and the server loop.

use log::*;
use std::future::IntoFuture;
use tokio::net::TcpListener;

pub use error::{Error, ErrorKind, Result};
pub use service::AppState;

mod controller;
mod error;
mod params;
mod response;
mod router;
mod sse;

pub use router::define_routes;

/// Bind `interface:port` from the config and serve until Ctrl-C.
///
/// On shutdown the serve future is dropped along with every open connection,
/// which drops every SSE stream and with it every bus subscription.
pub async fn init_server(app_state: AppState) -> Result<()> {
    let listen_addr = app_state.config.listen_addr();
    let listener = TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| Error::bind(&listen_addr, e))?;

    info!("Server starting... listening for connections on http://{listen_addr}");

    let router = router::define_routes(app_state);

    tokio::select! {
        result = axum::serve(listener, router).into_future() => result.map_err(Error::serve),
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
            Ok(())
        }
    }
}
