//! Server module
//!
//! Listener creation and the connection accept loop.

pub mod connection;
pub mod listener;

pub use listener::create_reusable_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections until the process is stopped.
///
/// An accept error is logged and the loop continues; a single failed
/// connection never takes the server down.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                connection::handle_connection(stream, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
