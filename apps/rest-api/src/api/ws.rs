//! Websocket echo endpoint.
//!
//! GET /websocket upgrades the connection, then logs every `{data, type}`
//! JSON message the client sends until the client closes or the connection
//! errors. Nothing is broadcast and no state is kept per connection.
//!
//! Try it from a browser console:
//! ```text
//! let ws = new WebSocket("ws://localhost:5000/websocket")
//! ws.send(JSON.stringify({data: "test message from browser", type: "test"}))
//! ```

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tracing::{info, warn};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/websocket", get(handle_upgrade))
}

/// Inbound message shape.
#[derive(Debug, Deserialize)]
struct SocketMessage {
    data: String,
    #[serde(rename = "type")]
    kind: String,
}

/// GET /websocket - upgrade to a websocket session
async fn handle_upgrade(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(mut socket: WebSocket) {
    info!("New websocket connection established");

    while let Some(message) = socket.recv().await {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "Websocket receive failed");
                break;
            }
        };

        match message {
            Message::Text(text) => match serde_json::from_str::<SocketMessage>(&text) {
                Ok(msg) => info!(data = %msg.data, kind = %msg.kind, "Received websocket message"),
                Err(e) => warn!(error = %e, "Ignoring malformed websocket message"),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!("Closing the websocket");
}
