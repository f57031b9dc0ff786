use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{sink::SinkExt, stream::StreamExt};
use geoedit_core::{ConfigError, Editor, EditorConfig};
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod protocol;
mod session;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

// Application State
struct AppState {
    editor: Arc<RwLock<Editor>>,
}

fn load_config() -> Result<EditorConfig, ConfigError> {
    match std::env::var("GEOEDIT_CONFIG") {
        Ok(path) => {
            info!("Loading config from {}", path);
            EditorConfig::load(path)
        }
        Err(_) => Ok(EditorConfig::default()),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let addr_str = std::env::var("GEOEDIT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let addr: SocketAddr = match addr_str.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid GEOEDIT_ADDR {:?}: {}", addr_str, e);
            return;
        }
    };

    info!(
        width = config.window_width,
        height = config.window_height,
        pick_threshold = config.pick_threshold,
        "Editor configured"
    );
    let shared_state = Arc::new(AppState {
        editor: Arc::new(RwLock::new(Editor::new(config))),
    });

    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    info!("listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}

async fn root() -> String {
    format!("geoedit backend {}", geoedit_core::version())
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let session_id = Uuid::new_v4();
    ws.on_upgrade(move |socket| {
        handle_socket(socket, state).instrument(tracing::info_span!("session", id = %session_id))
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("Client connected");
    let (mut sender, mut receiver) = socket.split();

    // Send the current scene so a late joiner starts in sync
    let initial = {
        let editor = state.editor.read().unwrap_or_else(PoisonError::into_inner);
        protocol::render_update(&editor.frame())
    };
    if sender.send(Message::Text(initial)).await.is_err() {
        return;
    }

    while let Some(msg) = receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                warn!("WebSocket error: {}", e);
                break;
            }
        };

        match msg {
            Message::Text(text) => {
                for reply in session::handle_text(&state.editor, &text) {
                    if sender.send(Message::Text(reply)).await.is_err() {
                        info!("Client disconnected");
                        return;
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!("Client disconnected");
}
